//! Help pages for `-h/--help[=COMMAND]`.

/// Topic used when `--help` is given without a command.
pub const GENERAL: &str = "general";

const GENERAL_HELP: &str = "\
Usage: rasterkit [-i FILE | FILE] [-o FILE] [--info | --<operation> <parameters>]

Basic options:
\t-h, --help[=COMMAND]\tShow help (general or for specific command)
\t-i, --input=FILE\tInput BMP/PNG image file (required)
\t-o, --output=FILE\tOutput BMP/PNG image file (default: out.bmp/out.png)
\t--info\t\t\tShow image information
\t--log_db=FILE\t\tProcessing log database (default: files.db, env: RASTERKIT_LOG_DB)
\t--no_log\t\tDo not record this run in the processing log

Operations (only one at a time):
\t--rect\t\t\tDraw rectangle
\t--circle\t\tDraw circle
\t--rotate\t\tRotate area
\t--color_replace\t\tReplace color
\t--mirror\t\tMirror area
\t--trim\t\t\tTrim image
\t--copy\t\t\tCopy area
\t--rgbfilter\t\tApply RGB filter
\t--collage\t\tCreate collage

For detailed help on specific operations, use:
\t--help=rect
\t--help=circle
\t--help=rotate
\t--help=color_replace
\t--help=mirror
\t--help=trim
\t--help=copy
\t--help=rgbfilter
\t--help=collage";

const STROKE_OPTIONAL: &str = "
Optional parameters:
\t--fill\t\t\tEnable fill
\t--fill_color=R.G.B\tFill color (RGB values, 0-255)";

const REGION: &str = "\
\t--left_up=X.Y\t\tCoordinates of first point
\t--right_down=X.Y\tCoordinates of second point";

/// Render the help page for `topic`.
///
/// Unknown topics produce a short notice rather than an error.
pub fn help_text(topic: &str) -> String {
    match topic {
        GENERAL => GENERAL_HELP.to_string(),
        "rect" => format!(
            "Draw rectangle operation:\n\nRequired parameters:\n{REGION}\n\
             \t--thickness=N\t\tBorder thickness (positive integer)\n\
             \t--color=R.G.B\t\tBorder color (RGB values, 0-255)\n{STROKE_OPTIONAL}"
        ),
        "circle" => format!(
            "Draw circle operation:\n\nRequired parameters:\n\
             \t--center=X.Y\t\tCenter coordinates\n\
             \t--radius=N\t\tCircle radius (positive integer)\n\
             \t--thickness=N\t\tBorder thickness (positive integer)\n\
             \t--color=R.G.B\t\tBorder color (RGB values, 0-255)\n{STROKE_OPTIONAL}"
        ),
        "rotate" => format!(
            "Rotate area operation:\n\nRequired parameters:\n{REGION}\n\
             \t--angle=N\t\tCounter-clockwise rotation angle (90, 180 or 270)"
        ),
        "color_replace" => "Color replace operation:\n\nRequired parameters:\n\
             \t--old_color=R.G.B\tColor to replace (RGB values, 0-255)\n\
             \t--new_color=R.G.B\tNew color (RGB values, 0-255)"
            .to_string(),
        "mirror" => format!(
            "Mirror area operation:\n\nRequired parameters:\n\
             \t--axis=x|y\t\tx flips left-right, y flips top-bottom\n{REGION}"
        ),
        "trim" => format!("Trim image operation:\n\nRequired parameters:\n{REGION}"),
        "copy" => format!(
            "Copy area operation:\n\nRequired parameters:\n{REGION}\n\
             \t--dest_left_up=X.Y\tTop-left corner of the destination"
        ),
        "rgbfilter" => "RGB filter operation:\n\nRequired parameters:\n\
             \t--component_name=NAME\tChannel to set (red, green or blue)\n\
             \t--component_value=N\tChannel value (0-255)"
            .to_string(),
        "collage" => "Collage operation:\n\nRequired parameters:\n\
             \t--number_x=N\t\tNumber of horizontal tiles (positive integer)\n\
             \t--number_y=N\t\tNumber of vertical tiles (positive integer)"
            .to_string(),
        other => format!("No detailed help available for: {other}"),
    }
}
