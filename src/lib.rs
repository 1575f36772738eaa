pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod scraping;

pub use config::{Config, MailgunConfig};
pub use error::{FetchError, NotifyError};
pub use handlers::check::check_offices;
pub use models::email::{EmailMessage, SendConfirmation};
pub use models::offices::{Office, OfficeTable};
pub use notify::{MailgunMailer, Mailer, Notifier};
pub use scraping::fetcher::{PageFetcher, build_url};
