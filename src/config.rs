use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgMatches, Command};

use crate::demo::Demo;
use crate::viewport::{ScreenSize, Viewport, MIN_EXTENT};

pub const DEFAULT_SCREEN_WIDTH: i32 = 800;
pub const DEFAULT_SCREEN_HEIGHT: i32 = 600;

/// Everything the application needs to start one demo.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub demo: Demo,
    pub screen: ScreenSize,
    pub initial_viewport: Viewport,
    pub shader_paths: Option<(PathBuf, PathBuf)>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_matches(&command().get_matches())
    }

    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_matches(&command().try_get_matches_from(args)?)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let demo = matches
            .get_one::<String>("demo")
            .and_then(|name| Demo::from_name(name))
            .unwrap_or(Demo::Advanced);

        let screen = ScreenSize::new(
            matches
                .get_one::<i32>("width")
                .copied()
                .unwrap_or(DEFAULT_SCREEN_WIDTH),
            matches
                .get_one::<i32>("height")
                .copied()
                .unwrap_or(DEFAULT_SCREEN_HEIGHT),
        );

        let initial_viewport = match matches.get_one::<Viewport>("viewport") {
            Some(viewport) => {
                if viewport.width > screen.width || viewport.height > screen.height {
                    bail!(
                        "viewport {}x{} does not fit the {}x{} screen",
                        viewport.width,
                        viewport.height,
                        screen.width,
                        screen.height
                    );
                }
                *viewport
            }
            None => Viewport::full_screen(screen),
        };

        let shader_paths = match (
            matches.get_one::<PathBuf>("vertex-shader"),
            matches.get_one::<PathBuf>("fragment-shader"),
        ) {
            (Some(vertex), Some(fragment)) => Some((vertex.clone(), fragment.clone())),
            _ => None,
        };

        Ok(Self {
            demo,
            screen,
            initial_viewport,
            shader_paths,
        })
    }
}

pub fn command() -> Command {
    let demo_names: Vec<&'static str> = Demo::ALL.iter().map(|demo| demo.name()).collect();

    Command::new("gl_viewport_lab")
        .about("OpenGL viewport tutorial programs")
        .arg(
            Arg::new("demo")
                .help("Program to run")
                .value_parser(PossibleValuesParser::new(demo_names))
                .default_value(Demo::Advanced.name()),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Screen width in pixels")
                .value_parser(value_parser!(i32).range(MIN_EXTENT as i64..)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Screen height in pixels")
                .value_parser(value_parser!(i32).range(MIN_EXTENT as i64..)),
        )
        .arg(
            Arg::new("viewport")
                .long("viewport")
                .value_name("X,Y,W,H")
                .help("Initial viewport rectangle (defaults to full screen)")
                .allow_hyphen_values(true)
                .value_parser(parse_viewport),
        )
        .arg(
            Arg::new("vertex-shader")
                .long("vertex-shader")
                .value_name("PATH")
                .requires("fragment-shader")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fragment-shader")
                .long("fragment-shader")
                .value_name("PATH")
                .requires("vertex-shader")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn parse_viewport(value: &str) -> Result<Viewport, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("expected four integers X,Y,W,H: {e}"))?;

    let &[x, y, width, height] = parts.as_slice() else {
        return Err(format!("expected four integers X,Y,W,H, got {}", parts.len()));
    };

    if width < MIN_EXTENT || height < MIN_EXTENT {
        return Err(format!("width and height must be at least {MIN_EXTENT}"));
    }

    Ok(Viewport::new(x, y, width, height))
}
