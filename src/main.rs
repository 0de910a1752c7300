use clap::Parser;
use sitenav::Site;
use sitenav::config::SiteConfig;

mod args;
use args::{Args, convert_state};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(args).await {
        ::log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Build the configuration: file first, then flag overrides
    let mut config = match &args.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => {
            let url = args
                .url
                .clone()
                .ok_or("a page URL or --config is required")?;
            SiteConfig::new(&url, args.section.as_deref().unwrap_or_default())
        }
    };
    if let Some(url) = &args.url {
        config.start_url = url.clone();
    }
    if let Some(section) = &args.section {
        config.nav_label = section.clone();
    }
    if let Some(agent) = &args.user_agent {
        config.user_agent = agent.clone();
    }

    ::log::info!("Reading navigation from {}", config.start_url);

    if args.toc {
        if config.nav_label.is_empty() {
            return Err("--toc needs a section label (--section or a config file)".into());
        }

        let site = Site::with_config(config);
        let toc = site.toc().await?;
        println!("{}", serde_json::to_string_pretty(&toc)?);
        return Ok(());
    }

    let site = Site::with_config(config);
    let mut page = site.start_page().await?;

    if let Some(label) = &args.section {
        // A named section is contractual: absence is a hard failure
        let mut section = page.require_section(label)?.clone();
        if let Some(state) = args.state {
            let state = convert_state(state);
            section.links.retain(|link| link.expansion == state);
        }
        println!("{}", serde_json::to_string_pretty(&section)?);
        return Ok(());
    }

    if let Some(state) = args.state {
        let state = convert_state(state);
        for section in &mut page.sections {
            section.links.retain(|link| link.expansion == state);
        }
    }
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
