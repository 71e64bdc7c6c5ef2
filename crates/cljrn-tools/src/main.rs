//! create-clojure-react-native - ClojureScript projects on top of React Native

use anyhow::Result;
use clap::Parser;
use cljrn_core::tui::CreateArgs;
use cljrn_core::{ProductConfig, ProjectDescriptor};

/// Product configuration
#[derive(Clone)]
pub struct ClojureNativeConfig;

impl ProductConfig for ClojureNativeConfig {
    fn name(&self) -> &'static str {
        "create-clojure-react-native"
    }

    fn display_name(&self) -> &'static str {
        "Clojure React Native"
    }

    fn registry_url(&self) -> &'static str {
        "https://clojars.org/api/artifacts/reagent/reagent"
    }

    fn registry_url_env(&self) -> &'static str {
        "CLJRN_REGISTRY_URL"
    }

    fn asset_url(&self) -> &'static str {
        "https://i.imgflip.com/411lb0.png"
    }

    fn asset_url_env(&self) -> &'static str {
        "CLJRN_ASSET_URL"
    }

    fn fallback_version(&self) -> &'static str {
        "1.1.1"
    }

    fn docs_url(&self) -> &'static str {
        "https://reactnative.dev/docs/environment-setup"
    }

    fn next_steps(&self, project: &ProjectDescriptor) -> Vec<String> {
        let name = &project.name;
        vec![
            "Start an android/ios emulator\n      \
             e.g. for android: https://developer.android.com/studio/run/managing-avds"
                .to_string(),
            format!(
                "In a new terminal, watch the ClojureScript code and recompile the JS on change:\n      \
                 cd {} && npx shadow-cljs watch app",
                name
            ),
            format!(
                "In a second terminal, start Metro (reloads the app; prn/println output shows up here):\n      \
                 cd {} && npm start",
                name
            ),
            format!(
                "In a third terminal, install and start the app in the emulator:\n      \
                 cd {} && npm run android",
                name
            ),
            "If the app crashes while reloading, restart it and press `r` in the `npm start` terminal"
                .to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-clojure-react-native")]
#[command(about = "Create a React Native app written in ClojureScript (shadow-cljs + reagent)")]
#[command(version)]
pub struct Args {
    /// Project name; asked for interactively when omitted
    pub name: Option<String>,

    /// Run the transformation on an existing project without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ClojureNativeConfig;

    let result = cljrn_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
