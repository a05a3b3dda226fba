use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "heatgrid", version, about = "Global Temperature Heatmap TUI")]
pub struct CliArgs {
    /// Print a dataset summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON (implies --headless)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the dataset URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Color palette: cool, viridis, plasma, bluered
    #[arg(long, value_name = "NAME")]
    pub palette: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.url {
            std::env::set_var("DATA_URL", url);
        }
        if let Some(palette) = &self.palette {
            std::env::set_var("PALETTE", palette);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
