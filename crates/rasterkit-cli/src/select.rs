//! Operation selection: turns the flat flag set into exactly one request.
//!
//! The selector is pure. It never touches the filesystem, so the order of
//! checks here decides which error a conflicting command line reports:
//! `--info` conflicts first, then the operation count, then missing
//! parameters, then token parsing.

use log::warn;
use rasterkit_core::adjust::{channel_value, Channel};
use rasterkit_core::draw::Stroke;
use rasterkit_core::transform::{MirrorAxis, RightAngle};
use rasterkit_core::{parse_color, parse_point, Color, EditError, Operation, Point};

use crate::args::{OperationFlags, ParameterArgs};

/// What the invocation was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Print file information and exit.
    Info,
    /// Apply one operation.
    Edit(Operation),
}

/// Pick the single request described by the flags.
pub fn select(
    info: bool,
    ops: &OperationFlags,
    params: &ParameterArgs,
) -> Result<Request, EditError> {
    let selected = ops.selected();

    if info {
        if !selected.is_empty() || !params.present().is_empty() {
            return Err(EditError::Arguments(
                "--info cannot be combined with other operations or parameters".to_string(),
            ));
        }
        return Ok(Request::Info);
    }

    let name = match selected.as_slice() {
        [] => return Err(EditError::Arguments("No operation specified".to_string())),
        [name] => *name,
        _ => {
            return Err(EditError::Arguments(
                "Only one operation can be performed at a time".to_string(),
            ))
        }
    };

    let operation = build(name, params)?;
    warn_unused(name, params);
    Ok(Request::Edit(operation))
}

/// Parameter flags each operation consumes.
fn accepted_flags(name: &str) -> &'static [&'static str] {
    match name {
        "rect" => &["--left_up", "--right_down", "--thickness", "--color", "--fill", "--fill_color"],
        "circle" => &["--center", "--radius", "--thickness", "--color", "--fill", "--fill_color"],
        "rotate" => &["--left_up", "--right_down", "--angle"],
        "mirror" => &["--axis", "--left_up", "--right_down"],
        "trim" => &["--left_up", "--right_down"],
        "copy" => &["--left_up", "--right_down", "--dest_left_up"],
        "color_replace" => &["--old_color", "--new_color"],
        "rgbfilter" => &["--component_name", "--component_value"],
        "collage" => &["--number_x", "--number_y"],
        _ => &[],
    }
}

fn warn_unused(name: &str, params: &ParameterArgs) {
    let accepted = accepted_flags(name);
    for flag in params.present() {
        if !accepted.contains(&flag) {
            warn!("{flag} is ignored by --{name}");
        }
    }
}

fn missing() -> EditError {
    EditError::Arguments("Missing required flags".to_string())
}

/// Unwrap a required parameter.
fn required<T>(value: Option<T>) -> Result<T, EditError> {
    value.ok_or_else(missing)
}

fn point(token: &Option<String>) -> Result<Point, EditError> {
    parse_point(required(token.as_deref())?)
}

fn color(token: &Option<String>) -> Result<Color, EditError> {
    parse_color(required(token.as_deref())?)
}

fn stroke(p: &ParameterArgs) -> Result<Stroke, EditError> {
    Ok(Stroke {
        thickness: required(p.thickness)?,
        color: color(&p.color)?,
        fill: p.fill,
        fill_color: p.fill_color.as_deref().map(parse_color).transpose()?,
    })
}

fn build(name: &str, p: &ParameterArgs) -> Result<Operation, EditError> {
    match name {
        "rect" => {
            if p.left_up.is_none()
                || p.right_down.is_none()
                || p.thickness.is_none()
                || p.color.is_none()
            {
                return Err(missing());
            }
            // Corners are parsed before colors
            let left_up = point(&p.left_up)?;
            let right_down = point(&p.right_down)?;
            Ok(Operation::Rect {
                left_up,
                right_down,
                stroke: stroke(p)?,
            })
        }
        "circle" => {
            if p.center.is_none()
                || p.radius.is_none()
                || p.thickness.is_none()
                || p.color.is_none()
            {
                return Err(missing());
            }
            let center = point(&p.center)?;
            Ok(Operation::Circle {
                center,
                radius: required(p.radius)?,
                stroke: stroke(p)?,
            })
        }
        "rotate" => {
            if p.left_up.is_none() || p.right_down.is_none() || p.angle.is_none() {
                return Err(missing());
            }
            Ok(Operation::Rotate {
                left_up: point(&p.left_up)?,
                right_down: point(&p.right_down)?,
                angle: RightAngle::try_from(required(p.angle)?)?,
            })
        }
        "mirror" => {
            if p.axis.is_none() || p.left_up.is_none() || p.right_down.is_none() {
                return Err(missing());
            }
            Ok(Operation::Mirror {
                axis: required(p.axis.as_deref())?.parse::<MirrorAxis>()?,
                left_up: point(&p.left_up)?,
                right_down: point(&p.right_down)?,
            })
        }
        "trim" => {
            if p.left_up.is_none() || p.right_down.is_none() {
                return Err(missing());
            }
            Ok(Operation::Trim {
                left_up: point(&p.left_up)?,
                right_down: point(&p.right_down)?,
            })
        }
        "copy" => {
            if p.left_up.is_none() || p.right_down.is_none() || p.dest_left_up.is_none() {
                return Err(missing());
            }
            Ok(Operation::Copy {
                left_up: point(&p.left_up)?,
                right_down: point(&p.right_down)?,
                dest: point(&p.dest_left_up)?,
            })
        }
        "color_replace" => {
            if p.old_color.is_none() || p.new_color.is_none() {
                return Err(missing());
            }
            Ok(Operation::ColorReplace {
                old: color(&p.old_color)?,
                new: color(&p.new_color)?,
            })
        }
        "rgbfilter" => {
            if p.component_name.is_none() || p.component_value.is_none() {
                return Err(missing());
            }
            Ok(Operation::RgbFilter {
                channel: required(p.component_name.as_deref())?.parse::<Channel>()?,
                value: channel_value(required(p.component_value)?)?,
            })
        }
        "collage" => Ok(Operation::Collage {
            number_x: required(p.number_x)?,
            number_y: required(p.number_y)?,
        }),
        other => Err(EditError::Arguments(format!("Unknown operation: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rasterkit_core::ExitCode;

    use crate::args::Cli;

    fn run(args: &[&str]) -> Result<Request, EditError> {
        let cli = Cli::try_parse_from(std::iter::once("rasterkit").chain(args.iter().copied()))
            .unwrap();
        select(cli.info, &cli.ops, &cli.params)
    }

    fn code(args: &[&str]) -> ExitCode {
        run(args).unwrap_err().exit_code()
    }

    #[test]
    fn test_info_alone() {
        assert_eq!(run(&["--info"]).unwrap(), Request::Info);
    }

    #[test]
    fn test_info_conflicts() {
        assert_eq!(code(&["--info", "--trim"]), ExitCode::CmdArgs);
        assert_eq!(code(&["--info", "--left_up", "1.1"]), ExitCode::CmdArgs);
        assert_eq!(code(&["--info", "--fill"]), ExitCode::CmdArgs);
    }

    #[test]
    fn test_operation_count() {
        let err = run(&[]).unwrap_err();
        assert_eq!(err.to_string(), "No operation specified");

        let err = run(&["--trim", "--mirror"]).unwrap_err();
        assert_eq!(err.to_string(), "Only one operation can be performed at a time");
        assert_eq!(err.exit_code(), ExitCode::CmdArgs);
    }

    #[test]
    fn test_missing_required() {
        let cases: [&[&str]; 9] = [
            &["--rect", "--left_up", "0.0", "--right_down", "9.9", "--color", "1.1.1"],
            &["--circle", "--center", "5.5", "--thickness", "1", "--color", "1.1.1"],
            &["--rotate", "--left_up", "0.0", "--right_down", "9.9"],
            &["--mirror", "--left_up", "0.0", "--right_down", "9.9"],
            &["--trim", "--left_up", "0.0"],
            &["--copy", "--left_up", "0.0", "--right_down", "9.9"],
            &["--color_replace", "--old_color", "1.1.1"],
            &["--rgbfilter", "--component_name", "red"],
            &["--collage", "--number_x", "2"],
        ];
        for args in cases {
            let err = run(args).unwrap_err();
            assert_eq!(err.to_string(), "Missing required flags", "{args:?}");
            assert_eq!(err.exit_code(), ExitCode::CmdArgs);
        }
    }

    #[test]
    fn test_missing_checked_before_parse() {
        // Malformed point, but a required flag is absent
        let err = run(&["--trim", "--left_up", "bad"]).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::CmdArgs);
    }

    #[test]
    fn test_token_errors_keep_their_codes() {
        assert_eq!(
            code(&["--trim", "--left_up", "0", "--right_down", "5.5"]),
            ExitCode::Coords
        );
        assert_eq!(
            code(&["--color_replace", "--old_color", "0.0.0", "--new_color", "300.0.0"]),
            ExitCode::Color
        );
        assert_eq!(
            code(&[
                "--rect", "--left_up", "0.0", "--right_down", "9.9", "--thickness", "1",
                "--color", "1.1.1", "--fill", "--fill_color", "1.1",
            ]),
            ExitCode::Color
        );
    }

    #[test]
    fn test_points_parsed_before_colors() {
        assert_eq!(
            code(&[
                "--rect", "--left_up", "0", "--right_down", "9.9", "--thickness", "1",
                "--color", "300.0.0",
            ]),
            ExitCode::Coords
        );
        assert_eq!(
            code(&[
                "--circle", "--center", "x.5", "--radius", "3", "--thickness", "1", "--color",
                "1.1", "--fill", "--fill_color", "0.0.0",
            ]),
            ExitCode::Coords
        );
        // Colors are still checked once the points are valid
        assert_eq!(
            code(&[
                "--rect", "--left_up", "0.0", "--right_down", "9.9", "--thickness", "1",
                "--color", "300.0.0",
            ]),
            ExitCode::Color
        );
    }

    #[test]
    fn test_rotate_angle() {
        let args = ["--rotate", "--left_up", "0.0", "--right_down", "4.4", "--angle"];
        let ok = run(&[&args[..], &["180"][..]].concat()).unwrap();
        assert!(matches!(
            ok,
            Request::Edit(Operation::Rotate {
                angle: RightAngle::Deg180,
                ..
            })
        ));
        assert_eq!(code(&[&args[..], &["45"][..]].concat()), ExitCode::Draw);
    }

    #[test]
    fn test_mirror_axis() {
        let args = ["--mirror", "--left_up", "0.0", "--right_down", "4.4", "--axis"];
        assert!(run(&[&args[..], &["x"][..]].concat()).is_ok());
        assert_eq!(code(&[&args[..], &["z"][..]].concat()), ExitCode::CmdArgs);
    }

    #[test]
    fn test_rgbfilter_arguments() {
        let ok = run(&["--rgbfilter", "--component_name", "green", "--component_value", "7"]);
        assert_eq!(
            ok.unwrap(),
            Request::Edit(Operation::RgbFilter {
                channel: Channel::Green,
                value: 7
            })
        );
        assert_eq!(
            code(&["--rgbfilter", "--component_name", "alpha", "--component_value", "7"]),
            ExitCode::CmdArgs
        );
        assert_eq!(
            code(&["--rgbfilter", "--component_name", "red", "--component_value", "256"]),
            ExitCode::CmdArgs
        );
    }

    #[test]
    fn test_rect_builds_stroke() {
        let req = run(&[
            "--rect", "--left_up", "0.0", "--right_down", "9.9", "--thickness", "2", "--color",
            "255.0.0", "--fill", "--fill_color", "0.0.255",
        ])
        .unwrap();
        let Request::Edit(Operation::Rect { stroke, .. }) = req else {
            panic!("expected rect, got {req:?}");
        };
        assert_eq!(stroke, Stroke::filled(2, Color::new(255, 0, 0), Color::new(0, 0, 255)));
    }

    #[test]
    fn test_fill_without_color_reaches_operation() {
        // Rejected when drawing, not when selecting
        let req = run(&[
            "--circle", "--center", "5.5", "--radius", "3", "--thickness", "1", "--color",
            "0.255.0", "--fill",
        ]);
        assert!(req.is_ok());
    }

    #[test]
    fn test_unrelated_parameters_ignored() {
        let req = run(&["--collage", "--number_x", "2", "--number_y", "3", "--axis", "x"]).unwrap();
        assert_eq!(
            req,
            Request::Edit(Operation::Collage {
                number_x: 2,
                number_y: 3
            })
        );
    }
}
