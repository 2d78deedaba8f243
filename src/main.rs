use clap::{Parser, Subcommand};
use log::info;
use optiblink_ui::config::{constants, Config};
use optiblink_ui::contact::show_emergency_contact_dialog_with_theme;
use optiblink_ui::splash::{
    show_splash_threaded_with_theme, show_splash_with_theme, CompletionCallback,
};
use optiblink_ui::style::AppTheme;
use optiblink_ui::{logging, Result};

#[derive(Parser)]
#[command(name = "optiblink")]
#[command(about = "OptiBlink startup splash screen and emergency contact setup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the startup splash screen
    Splash {
        /// Total animation time in seconds (defaults to the configured value)
        #[arg(long, short)]
        duration: Option<f32>,

        /// Run the splash on a background thread
        #[arg(long)]
        threaded: bool,
    },

    /// Ask for the emergency contact
    Contact,
}

fn main() -> Result<()> {
    let config = Config::new()?;
    logging::init_logging(Some(&config.paths().log_file))?;

    let cli = Cli::parse();
    let theme = AppTheme::resolve(config.settings().theme);

    match cli.command {
        Some(Commands::Splash { duration, threaded }) => {
            let duration = duration.unwrap_or(config.settings().splash_duration_secs);
            splash(duration, threaded, theme)
        }
        Some(Commands::Contact) => contact(theme),
        None => {
            // Plain invocation just demos the splash screen
            splash(constants::splash::DEFAULT_DURATION_SECS, false, theme)
        }
    }
}

fn splash(duration: f32, threaded: bool, theme: AppTheme) -> Result<()> {
    let on_complete: CompletionCallback = Box::new(|| info!("Splash screen complete"));

    if threaded {
        let handle = show_splash_threaded_with_theme(duration, Some(on_complete), theme)?;
        println!("Splash screen running in the background...");
        handle.join()
    } else {
        show_splash_with_theme(duration, Some(on_complete), theme)
    }
}

fn contact(theme: AppTheme) -> Result<()> {
    match show_emergency_contact_dialog_with_theme(theme)? {
        Some(result) => {
            println!("Emergency contact: {}", result.contact_number);
            println!(
                "WhatsApp preference: {}",
                if result.prefer_whatsapp { "Yes" } else { "No" }
            );
        }
        None => println!("Dialog cancelled"),
    }

    Ok(())
}
