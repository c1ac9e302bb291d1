use super::drive::{DriveDocument, DriveGateway, DriveOperationError};
use crate::workflows::prevention::domain::PreventionProgram;
use crate::workflows::prevention::markdown::export_to_markdown;

#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub drive_folder_id: String,
}

#[derive(Debug, Clone)]
pub struct PublishedProgram {
    pub google_doc_id: String,
    pub document_title: String,
    /// Documents already present in the target folder, listed so callers
    /// can flag potential duplicates to the employer.
    pub existing_documents: Vec<DriveDocument>,
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error(transparent)]
    Drive(#[from] DriveOperationError),
}

#[derive(Debug)]
pub struct ProgramPublisher {
    drive: Box<dyn DriveGateway>,
}

impl ProgramPublisher {
    pub fn new(drive: Box<dyn DriveGateway>) -> Self {
        Self { drive }
    }

    /// Renders the program to Markdown and uploads it as a Google Doc in
    /// the employer's shared folder.
    pub fn publish(
        &self,
        program: &PreventionProgram,
        request: PublishRequest,
    ) -> Result<PublishedProgram, PublishError> {
        let existing_documents = self
            .drive
            .list_program_documents(&request.drive_folder_id)?;

        let body = export_to_markdown(program);
        let document_title = format!("{} ({})", program.title, program.generated_date);

        let google_doc_id = self.drive.create_program_document(
            &document_title,
            &body,
            Some(request.drive_folder_id.as_str()),
        )?;

        Ok(PublishedProgram {
            google_doc_id,
            document_title,
            existing_documents,
        })
    }
}
