use clap::{Arg, ArgAction};

/// Argument id of the flag that lifts the dry-run gate.
pub const NO_DRY_RUN: &str = "no_dry_run";

/// Builds an argument spec from an option string.
///
/// `--name` becomes a long option taking a value, `-n` a short one, anything
/// else a required positional. Dashes in long names map to underscores in the
/// argument id, so `--output-dir` is read back as `output_dir`.
pub fn add_argument(name: &'static str) -> Arg {
	if let Some(long) = name.strip_prefix("--") {
		return Arg::new(long.replace('-', "_")).long(long);
	}
	if let Some(short) = name.strip_prefix('-')
		&& let Some(flag) = short.chars().next()
		&& short.len() == flag.len_utf8()
	{
		return Arg::new(short).short(flag);
	}
	Arg::new(name).required(true)
}

/// The reserved `--no-dry-run` flag.
pub fn no_dry_run() -> Arg {
	add_argument("--no-dry-run")
		.action(ArgAction::SetTrue)
		.help("Run side-effecting commands instead of logging them")
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("--output-dir", "output_dir", Some("output-dir"), None, false)]
	#[case("-v", "v", None, Some('v'), false)]
	#[case("target", "target", None, None, true)]
	#[case("-vv", "-vv", None, None, true)]
	fn option_strings(
		#[case] name: &'static str,
		#[case] id: &str,
		#[case] long: Option<&str>,
		#[case] short: Option<char>,
		#[case] positional: bool,
	) {
		let arg = add_argument(name);
		assert_eq!(arg.get_id().as_str(), id);
		assert_eq!(arg.get_long(), long);
		assert_eq!(arg.get_short(), short);
		assert_eq!(arg.is_positional(), positional);
	}

	#[test]
	fn no_dry_run_is_a_flag() {
		let arg = no_dry_run();
		assert_eq!(arg.get_id().as_str(), NO_DRY_RUN);
		assert_eq!(arg.get_long(), Some("no-dry-run"));
		assert!(matches!(arg.get_action(), ArgAction::SetTrue));
	}
}
