mod cli;

use std::env;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use belabela_site::date::DateLocale;
use belabela_site::footer::{self, Clock, CLOCK_PERIOD};
use belabela_site::source::Source;
use belabela_site::{Document, Site};
use chrono::{Local, Offset};
use log::{debug, info, warn};
use tokio::{signal, time};

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "belabela_site=info,belabela=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let html = tokio::fs::read_to_string(&args.page)
        .await
        .with_context(|| format!("Failed to read page {}", args.page.display()))?;
    let mut doc = Document::parse(&html);

    let now = args.now.unwrap_or_else(|| {
        let local = Local::now();
        local.with_timezone(&local.offset().fix())
    });

    let base = args.data.unwrap_or_else(|| {
        args.page
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .display()
            .to_string()
    });
    debug!("Reading data from {base}");

    let mut site = Site::new(Source::from_base(&base)?, DateLocale::new(&args.locale));
    site.phone = args.phone;

    if let Some(year) = doc.targets.year.as_mut() {
        footer::stamp_year(year, &now);
    }

    let clock = doc.targets.clock.take().map(|el| Arc::new(Mutex::new(el)));
    let ticking = clock.as_ref().map(|target| {
        Clock::start(Arc::clone(target), CLOCK_PERIOD, || Local::now().time())
    });

    site.load(&mut doc, &now, &args.interactions).await;

    if let Some(ticking) = ticking {
        if !args.clock.is_zero() {
            info!("Clock running for {}s", args.clock.as_secs());
            tokio::select! {
                _ = time::sleep(args.clock) => {}
                _ = signal::ctrl_c() => info!("Interrupted"),
            }
        }
        ticking.stop().await;
    }

    if let Some(clock) = clock {
        match clock.lock() {
            Ok(el) => doc.targets.clock = Some(el.clone()),
            Err(_) => warn!("Clock target poisoned"),
        }
    }

    for element in doc.targets.present() {
        println!("{}", element.to_html());
    }

    Ok(())
}
