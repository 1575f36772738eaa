use dotenv::dotenv;
use lediga_tider::{Config, MailgunMailer, Notifier, PageFetcher, check_offices};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = Config::from_env();

    let fetcher = PageFetcher::new(config.fetch_timeout)?;
    let mailer = MailgunMailer::new(&config.mailgun)?;
    let notifier = Notifier::new(mailer, config.mailgun.domain.clone(), config.send_timeout);

    check_offices(&config, &fetcher, &notifier).await;

    Ok(())
}
