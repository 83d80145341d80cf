use std::env;
use std::path::PathBuf;
use std::process;

use belabela_site::contact::{Field, DEFAULT_PHONE};
use belabela_site::date::host_locale_name;
use belabela_site::UserEvent;
use chrono::{DateTime, FixedOffset};
use getopts::Options;
use tokio::time::Duration;

pub struct Args {
    pub page: PathBuf,
    pub data: Option<String>,
    pub now: Option<DateTime<FixedOffset>>,
    pub locale: String,
    pub phone: String,
    pub clock: Duration,
    pub interactions: Vec<UserEvent>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "d",
        "data",
        "Base URL or directory of the JSON data files [Default: the page's directory]",
        "BASE",
    );
    opts.optopt(
        "n",
        "now",
        "Reference instant for upcoming events [Default: current time]",
        "RFC3339",
    );
    opts.optopt(
        "l",
        "locale",
        "Locale for dates [Default: from LC_ALL/LC_TIME/LANG, else en_US]",
        "LOCALE",
    );
    opts.optopt(
        "c",
        "clock",
        "Keep the footer clock running for this long [Default: 0]",
        "SECONDS",
    );
    opts.optflagmulti("t", "toggle-nav", "Click the navigation menu button");
    opts.optflag("", "follow-link", "Click a navigation link after the toggles");
    opts.optopt("", "phone", "WhatsApp number of the contact link", "NUMBER");
    opts.optopt("", "name", "Type into the contact form's name field", "TEXT");
    opts.optopt("", "email", "Type into the contact form's email field", "TEXT");
    opts.optopt("", "message", "Type into the contact form's message field", "TEXT");
    opts
}

fn usage(opts: &Options) -> String {
    let brief = format!("Usage: {} [options] PAGE.html", env!("CARGO_BIN_NAME"));
    opts.usage(&brief)
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", usage(&opts));
        process::exit(0);
    }

    let Some(page) = matches.free.first().map(PathBuf::from) else {
        eprintln!("{}", usage(&opts));
        process::exit(1);
    };

    let now = matches.opt_str("now").map(|raw| {
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(now) => now,
            Err(err) => {
                eprintln!("Provided value for option 'now' is invalid: {err}");
                process::exit(1);
            }
        }
    });

    let clock = match matches.opt_get_default("clock", 0) {
        Ok(secs) => Duration::from_secs(secs),
        Err(err) => {
            eprintln!("Provided value for option 'clock' is invalid: {err}");
            process::exit(1);
        }
    };

    let mut interactions = vec![UserEvent::NavButton; matches.opt_count("toggle-nav")];
    if matches.opt_present("follow-link") {
        interactions.push(UserEvent::NavLink);
    }
    for (name, field) in [
        ("name", Field::Name),
        ("email", Field::Email),
        ("message", Field::Message),
    ] {
        if let Some(value) = matches.opt_str(name) {
            interactions.push(UserEvent::Input(field, value));
        }
    }

    Args {
        page,
        data: matches.opt_str("data"),
        now,
        locale: matches
            .opt_str("locale")
            .or_else(|| host_locale_name(|name| env::var(name).ok()))
            .unwrap_or_else(|| "en_US".to_string()),
        phone: matches
            .opt_str("phone")
            .unwrap_or_else(|| DEFAULT_PHONE.to_string()),
        clock,
        interactions,
    }
}
