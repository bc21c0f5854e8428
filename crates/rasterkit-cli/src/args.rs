//! Command line definition using clap derive macros.
//!
//! Flags keep their underscore spelling (`--left_up`, `--color_replace`)
//! and accept both `--flag value` and `--flag=value`. The built-in help flag
//! is replaced by `-h/--help[=COMMAND]` so that each operation can have its
//! own help page.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Raster image editor: one drawing or transform operation per run
#[derive(Parser, Debug, Default)]
#[command(name = "rasterkit", version, about)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Show help (general or for a specific command)
    #[arg(
        short = 'h',
        long = "help",
        value_name = "COMMAND",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "general"
    )]
    pub help: Option<String>,

    /// Input BMP/PNG image file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output BMP/PNG image file (default: out.<input extension>)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show image information
    #[arg(long = "info")]
    pub info: bool,

    #[command(flatten)]
    pub ops: OperationFlags,

    #[command(flatten)]
    pub params: ParameterArgs,

    /// SQLite database that records processed files
    #[arg(
        long = "log_db",
        value_name = "FILE",
        env = "RASTERKIT_LOG_DB",
        default_value = "files.db"
    )]
    pub log_db: PathBuf,

    /// Do not record this run in the processing log
    #[arg(long = "no_log")]
    pub no_log: bool,

    /// Input image file
    #[arg(value_name = "INPUT")]
    pub input_file: Option<PathBuf>,
}

impl Cli {
    /// The input path from `--input` or the positional argument.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().or(self.input_file.as_ref())
    }
}

/// Operation selectors. At most one may be set.
#[derive(Args, Debug, Default, Clone)]
pub struct OperationFlags {
    /// Draw rectangle
    #[arg(long = "rect")]
    pub rect: bool,

    /// Draw circle
    #[arg(long = "circle")]
    pub circle: bool,

    /// Rotate area
    #[arg(long = "rotate")]
    pub rotate: bool,

    /// Replace color
    #[arg(long = "color_replace")]
    pub color_replace: bool,

    /// Mirror area
    #[arg(long = "mirror")]
    pub mirror: bool,

    /// Trim image
    #[arg(long = "trim")]
    pub trim: bool,

    /// Copy area
    #[arg(long = "copy")]
    pub copy: bool,

    /// Apply RGB filter
    #[arg(long = "rgbfilter")]
    pub rgbfilter: bool,

    /// Create collage
    #[arg(long = "collage")]
    pub collage: bool,
}

impl OperationFlags {
    /// Names of the operation flags that were given, in declaration order.
    pub fn selected(&self) -> Vec<&'static str> {
        [
            (self.rect, "rect"),
            (self.circle, "circle"),
            (self.rotate, "rotate"),
            (self.color_replace, "color_replace"),
            (self.mirror, "mirror"),
            (self.trim, "trim"),
            (self.copy, "copy"),
            (self.rgbfilter, "rgbfilter"),
            (self.collage, "collage"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// Parameters consumed by the operations.
///
/// Points and colors stay as raw tokens here; they are parsed when the
/// operation is built so that malformed tokens report their own exit codes.
#[derive(Args, Debug, Default, Clone)]
pub struct ParameterArgs {
    /// Coordinates of left upper point (X.Y)
    #[arg(long = "left_up", value_name = "X.Y", allow_hyphen_values = true)]
    pub left_up: Option<String>,

    /// Coordinates of right lower point (X.Y)
    #[arg(long = "right_down", value_name = "X.Y", allow_hyphen_values = true)]
    pub right_down: Option<String>,

    /// Border thickness
    #[arg(long = "thickness", value_name = "N", allow_negative_numbers = true)]
    pub thickness: Option<i64>,

    /// Color in R.G.B format
    #[arg(long = "color", value_name = "R.G.B", allow_hyphen_values = true)]
    pub color: Option<String>,

    /// Enable fill
    #[arg(long = "fill")]
    pub fill: bool,

    /// Fill color in R.G.B format
    #[arg(long = "fill_color", value_name = "R.G.B", allow_hyphen_values = true)]
    pub fill_color: Option<String>,

    /// Center coordinates (X.Y)
    #[arg(long = "center", value_name = "X.Y", allow_hyphen_values = true)]
    pub center: Option<String>,

    /// Circle radius
    #[arg(long = "radius", value_name = "N", allow_negative_numbers = true)]
    pub radius: Option<i64>,

    /// Rotation angle
    #[arg(long = "angle", value_name = "N", allow_negative_numbers = true)]
    pub angle: Option<i64>,

    /// Old color to replace
    #[arg(long = "old_color", value_name = "R.G.B", allow_hyphen_values = true)]
    pub old_color: Option<String>,

    /// New color
    #[arg(long = "new_color", value_name = "R.G.B", allow_hyphen_values = true)]
    pub new_color: Option<String>,

    /// Mirror axis (x or y)
    #[arg(long = "axis", value_name = "x|y")]
    pub axis: Option<String>,

    /// Destination coordinates for copy
    #[arg(long = "dest_left_up", value_name = "X.Y", allow_hyphen_values = true)]
    pub dest_left_up: Option<String>,

    /// RGB component name
    #[arg(long = "component_name", value_name = "red|green|blue")]
    pub component_name: Option<String>,

    /// RGB component value
    #[arg(long = "component_value", value_name = "N", allow_negative_numbers = true)]
    pub component_value: Option<i64>,

    /// Number of horizontal tiles
    #[arg(long = "number_x", value_name = "N", allow_negative_numbers = true)]
    pub number_x: Option<i64>,

    /// Number of vertical tiles
    #[arg(long = "number_y", value_name = "N", allow_negative_numbers = true)]
    pub number_y: Option<i64>,
}

impl ParameterArgs {
    /// Flags of every parameter that was given, in declaration order.
    pub fn present(&self) -> Vec<&'static str> {
        [
            (self.left_up.is_some(), "--left_up"),
            (self.right_down.is_some(), "--right_down"),
            (self.thickness.is_some(), "--thickness"),
            (self.color.is_some(), "--color"),
            (self.fill, "--fill"),
            (self.fill_color.is_some(), "--fill_color"),
            (self.center.is_some(), "--center"),
            (self.radius.is_some(), "--radius"),
            (self.angle.is_some(), "--angle"),
            (self.old_color.is_some(), "--old_color"),
            (self.new_color.is_some(), "--new_color"),
            (self.axis.is_some(), "--axis"),
            (self.dest_left_up.is_some(), "--dest_left_up"),
            (self.component_name.is_some(), "--component_name"),
            (self.component_value.is_some(), "--component_value"),
            (self.number_x.is_some(), "--number_x"),
            (self.number_y.is_some(), "--number_y"),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect()
    }
}
