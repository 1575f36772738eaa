use tracing::{error, info};

use crate::config::Config;
use crate::notify::{Mailer, Notifier};
use crate::scraping::detector::is_unavailable;
use crate::scraping::fetcher::{PageFetcher, build_url};

/// One pass over every configured office. Offices are handled one at a
/// time and a failure for one never stops the others.
pub async fn check_offices<M: Mailer>(
    config: &Config,
    fetcher: &PageFetcher,
    notifier: &Notifier<M>,
) {
    for office in config.offices.iter() {
        info!("{}: {}", office.name, office.code);

        let url = build_url(&config.booking_url, &office.code);

        let body = match fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                error!("error fetching {}: {}", office.name, e);
                continue;
            }
        };

        if is_unavailable(&body) {
            info!("{}: no time available", office.name);
            continue;
        }

        if config.is_suppressed(&office.name) {
            info!("{}: times may be available, notification suppressed", office.name);
            continue;
        }

        notifier.notify(&office.name, &url).await;
    }
}
