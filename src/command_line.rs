use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Format {
    Html,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown format {}. Expected html or json", other)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Art Direction",
    about = "A tool to turn fixed or fluid image props into an art-directed picture"
)]
pub struct Options {
    /// The path to a JSON file containing either a `fixed` or a `fluid` image stack
    #[structopt(parse(from_os_str))]
    pub props: PathBuf,

    /// The output format: html or json
    #[structopt(short = "f", long = "format", default_value = "html")]
    pub format: Format,

    /// Where to write the picture. Defaults to stdout
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Report the image in use for a viewport of this width
    #[structopt(long = "viewport-width")]
    pub viewport_width: Option<f64>,

    /// Height of the viewport used with --viewport-width
    #[structopt(long = "viewport-height", default_value = "1080")]
    pub viewport_height: f64,
}
