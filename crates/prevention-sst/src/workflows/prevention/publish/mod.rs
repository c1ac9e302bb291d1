pub mod drive;
pub mod publisher;

pub use drive::{DriveDocument, DriveGateway, DriveOperationError, GoogleDriveClient};
pub use publisher::{ProgramPublisher, PublishError, PublishRequest, PublishedProgram};
