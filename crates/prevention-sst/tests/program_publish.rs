use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use prevention_sst::workflows::prevention::publish::{
    DriveDocument, DriveGateway, DriveOperationError, ProgramPublisher, PublishRequest,
};
use prevention_sst::workflows::prevention::{CompanyProfile, PreventionProgramGenerator};

type CreatedDoc = (String, String, Option<String>);

#[derive(Debug)]
struct FakeDriveGateway {
    existing: Vec<DriveDocument>,
    created_docs: Arc<Mutex<Vec<CreatedDoc>>>,
    fail_listing: bool,
}

impl FakeDriveGateway {
    fn new(existing: Vec<DriveDocument>) -> (Self, Arc<Mutex<Vec<CreatedDoc>>>) {
        let created_docs = Arc::new(Mutex::new(Vec::new()));
        let gateway = Self {
            existing,
            created_docs: Arc::clone(&created_docs),
            fail_listing: false,
        };
        (gateway, created_docs)
    }

    fn failing() -> Self {
        Self {
            existing: Vec::new(),
            created_docs: Arc::new(Mutex::new(Vec::new())),
            fail_listing: true,
        }
    }
}

impl DriveGateway for FakeDriveGateway {
    fn list_program_documents(
        &self,
        _folder_id: &str,
    ) -> Result<Vec<DriveDocument>, DriveOperationError> {
        if self.fail_listing {
            return Err(DriveOperationError::Backend("quota exceeded".to_string()));
        }
        Ok(self.existing.clone())
    }

    fn create_program_document(
        &self,
        title: &str,
        markdown_body: &str,
        parent_folder_id: Option<&str>,
    ) -> Result<String, DriveOperationError> {
        let mut guard = self.created_docs.lock().expect("doc mutex");
        guard.push((
            title.to_string(),
            markdown_body.to_string(),
            parent_folder_id.map(str::to_string),
        ));
        Ok("doc-123".to_string())
    }
}

fn sample_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Toitures Gagnon".to_string(),
        sector: "construction".to_string(),
        scian_code: Some("2361".to_string()),
        company_size: 35,
        main_activities: Vec::new(),
        identified_risks: Vec::new(),
        existing_measures: Vec::new(),
    }
}

fn sample_program() -> prevention_sst::workflows::prevention::PreventionProgram {
    PreventionProgramGenerator::generate_program_on(
        &sample_profile(),
        NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date"),
    )
}

fn folder_request() -> PublishRequest {
    PublishRequest {
        drive_folder_id: "folder-42".to_string(),
    }
}

#[test]
fn publisher_uploads_the_markdown_rendition() {
    let existing = vec![DriveDocument {
        file_id: "doc-001".to_string(),
        name: "Programme 2024".to_string(),
        mime_type: Some("application/vnd.google-apps.document".to_string()),
        web_view_link: None,
    }];
    let (gateway, created_docs) = FakeDriveGateway::new(existing);

    let publisher = ProgramPublisher::new(Box::new(gateway));
    let published = publisher
        .publish(&sample_program(), folder_request())
        .expect("publish succeeds");

    assert_eq!(published.google_doc_id, "doc-123");
    assert_eq!(
        published.document_title,
        "Programme de pr\u{e9}vention - Toitures Gagnon (2025-10-01)"
    );
    assert_eq!(published.existing_documents.len(), 1);
    assert_eq!(published.existing_documents[0].name, "Programme 2024");

    let created = created_docs.lock().expect("doc mutex");
    assert_eq!(created.len(), 1);
    let (title, body, parent) = &created[0];
    assert_eq!(title, &published.document_title);
    assert!(body.starts_with("# Programme de pr\u{e9}vention - Toitures Gagnon"));
    assert!(body.contains("## ANNEXE E - APPROBATION ET TRANSMISSION"));
    assert_eq!(parent.as_deref(), Some("folder-42"));
}

#[test]
fn empty_folders_publish_without_duplicate_warnings() {
    let (gateway, _created_docs) = FakeDriveGateway::new(Vec::new());

    let publisher = ProgramPublisher::new(Box::new(gateway));
    let published = publisher
        .publish(&sample_program(), folder_request())
        .expect("publish succeeds");

    assert!(published.existing_documents.is_empty());
}

#[test]
fn drive_failures_surface_as_publish_errors() {
    let gateway = FakeDriveGateway::failing();

    let publisher = ProgramPublisher::new(Box::new(gateway));
    let error = publisher
        .publish(&sample_program(), folder_request())
        .expect_err("publish fails");

    assert!(error.to_string().contains("quota exceeded"));
}
