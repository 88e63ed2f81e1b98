use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use fltiq::LaunchParams;
use fltiq::types::DEFAULT_INTERPRETER;

#[derive(Parser, Debug)]
#[command(
    name = "fltiq",
    version,
    about = "Launch the FLTIQ transcript identification and quantification pipeline",
    args_override_self = true
)]
pub struct CliArgs {
    /// Input data directory (required)
    #[arg(short = 'd', value_name = "DATA_DIR", allow_hyphen_values = true)]
    pub data_dir: Option<String>,

    /// Directory that will store the results (required)
    #[arg(short = 'o', value_name = "OUTPUT_DIR", allow_hyphen_values = true)]
    pub output_dir: Option<String>,

    /// Number of CPUs [default: 4]
    #[arg(short = 'p', value_name = "CPU_NUMBER", allow_hyphen_values = true)]
    pub cpu_number: Option<String>,

    /// SQANTI installation directory (required)
    #[arg(short = 's', value_name = "SQANTI_DIR", allow_hyphen_values = true)]
    pub sqanti_dir: Option<String>,

    /// Project name; results are stored under it
    #[arg(short = 'n', value_name = "PROJ_NAME", allow_hyphen_values = true)]
    pub proj_name: Option<String>,

    /// Reference genome (FASTA)
    #[arg(short = 'r', value_name = "REFERENCE", allow_hyphen_values = true)]
    pub reference: Option<String>,

    /// GTF annotation file (required)
    #[arg(short = 'a', value_name = "ANNOTATION", allow_hyphen_values = true)]
    pub annotation: Option<String>,

    /// Full-length reads (FASTA/FASTQ)
    #[arg(short = 'f', value_name = "FL_READS", allow_hyphen_values = true)]
    pub fl_reads: Option<String>,

    /// HISAT2 index prefix
    #[arg(short = 'i', value_name = "HISAT2_IDX", allow_hyphen_values = true)]
    pub hisat2_idx: Option<String>,

    /// Short-read mate 1
    #[arg(short = '1', value_name = "R1", allow_hyphen_values = true)]
    pub r1: Option<String>,

    /// Short-read mate 2
    #[arg(short = '2', value_name = "R2", allow_hyphen_values = true)]
    pub r2: Option<String>,

    /// Interpreter used to run the driver script
    #[arg(long, env = "FLTIQ_PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub python: String,

    /// JSON file with launch parameters; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Print the driver invocation as JSON instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

const VALUE_SHORTS: &[char] = &['d', 'o', 'p', 's', 'n', 'r', 'a', 'f', 'i', '1', '2'];
const SWITCH_SHORTS: &[char] = &['h', 'V'];
const VALUE_LONGS: &[&str] = &["python", "params"];
const SWITCH_LONGS: &[&str] = &["dry-run", "log", "help", "version"];

/// Command line split into what clap will see and what was dropped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FilteredArgs {
    pub kept: Vec<OsString>,
    pub ignored: Vec<OsString>,
}

/// Drop everything the launcher does not recognize so that unknown flags and
/// stray words never fail the parse. An unknown flag takes its following
/// token with it unless that token is itself a flag. Short clusters are read
/// one letter at a time, so `-zd /x` still sets `-d`. A recognized flag with
/// no value left is dropped, leaving the parameter unset. Kept tokens are
/// converted to UTF-8 lossily.
pub fn retain_recognized<I, T>(argv: I) -> FilteredArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = argv.into_iter().map(Into::into).peekable();
    let mut out = FilteredArgs::default();

    if let Some(bin) = tokens.next() {
        out.kept.push(bin);
    }

    let is_value =
        |next: Option<&OsString>| next.is_some_and(|t| !t.to_string_lossy().starts_with('-'));
    let lossy = |t: OsString| OsString::from(t.to_string_lossy().into_owned());

    while let Some(token) = tokens.next() {
        let text = token.to_string_lossy().into_owned();

        if text == "--" {
            out.ignored.push(token);
            out.ignored.extend(tokens.by_ref());
            break;
        }

        if let Some(long) = text.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            if VALUE_LONGS.contains(&name) {
                if inline {
                    out.kept.push(OsString::from(text));
                } else if is_value(tokens.peek()) {
                    out.kept.push(OsString::from(text));
                    out.kept.extend(tokens.next().map(lossy));
                } else {
                    out.ignored.push(token);
                }
            } else if SWITCH_LONGS.contains(&name) && !inline {
                out.kept.push(token);
            } else {
                out.ignored.push(token);
                if !inline && is_value(tokens.peek()) {
                    out.ignored.extend(tokens.next());
                }
            }
            continue;
        }

        let Some(cluster) = text.strip_prefix('-').filter(|c| !c.is_empty()) else {
            out.ignored.push(token);
            continue;
        };

        let mut letters = cluster.chars();
        if let (Some(flag), None) = (letters.next(), letters.next()) {
            if !VALUE_SHORTS.contains(&flag) && !SWITCH_SHORTS.contains(&flag) {
                out.ignored.push(token);
                if is_value(tokens.peek()) {
                    out.ignored.extend(tokens.next());
                }
                continue;
            }
        }

        let mut rest = cluster;
        while let Some(flag) = rest.chars().next() {
            rest = &rest[flag.len_utf8()..];
            let name = OsString::from(format!("-{flag}"));
            if VALUE_SHORTS.contains(&flag) {
                let value = if rest.is_empty() {
                    tokens.next().map(lossy)
                } else {
                    Some(OsString::from(rest))
                };
                match value {
                    Some(value) => out.kept.extend([name, value]),
                    None => out.ignored.push(name),
                }
                break;
            } else if SWITCH_SHORTS.contains(&flag) {
                out.kept.push(name);
            } else {
                out.ignored.push(name);
            }
        }
    }

    out
}

impl CliArgs {
    /// Parse after dropping unrecognized tokens; returns the dropped ones too.
    pub fn parse_lenient<I, T>(argv: I) -> Result<(Self, Vec<OsString>), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let filtered = retain_recognized(argv);
        Ok((Self::try_parse_from(filtered.kept)?, filtered.ignored))
    }

    /// Launch parameters given on the command line.
    pub fn to_params(&self) -> LaunchParams {
        LaunchParams {
            data_dir: self.data_dir.clone(),
            output_dir: self.output_dir.clone(),
            cpu_number: self.cpu_number.clone(),
            sqanti_dir: self.sqanti_dir.clone(),
            proj_name: self.proj_name.clone(),
            reference: self.reference.clone(),
            annotation: self.annotation.clone(),
            fl_reads: self.fl_reads.clone(),
            hisat2_idx: self.hisat2_idx.clone(),
            r1: self.r1.clone(),
            r2: self.r2.clone(),
        }
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<const N: usize>(argv: [&str; N]) -> (CliArgs, Vec<OsString>) {
        CliArgs::parse_lenient(argv).unwrap()
    }

    fn strings(v: &[OsString]) -> Vec<String> {
        v.iter().map(|s| s.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn recognized_flags_are_parsed() {
        let (args, ignored) = parse([
            "fltiq", "-d", "/data", "-o", "/out", "-s", "/sqanti", "-a", "anno.gtf", "-p", "8",
            "-1", "r1.fq", "-2", "r2.fq",
        ]);

        assert!(ignored.is_empty());
        let params = args.to_params();
        assert_eq!(params.data_dir.as_deref(), Some("/data"));
        assert_eq!(params.annotation.as_deref(), Some("anno.gtf"));
        assert_eq!(params.cpu_number.as_deref(), Some("8"));
        assert_eq!(params.r1.as_deref(), Some("r1.fq"));
        assert_eq!(params.r2.as_deref(), Some("r2.fq"));
        assert!(!args.dry_run);
    }

    #[test]
    fn attached_values_are_accepted() {
        let (args, _) = parse(["fltiq", "-d/data", "-nliver"]);
        assert_eq!(args.data_dir.as_deref(), Some("/data"));
        assert_eq!(args.proj_name.as_deref(), Some("liver"));
    }

    #[test]
    fn last_occurrence_wins() {
        let (args, _) = parse(["fltiq", "-p", "2", "-p", "12"]);
        assert_eq!(args.cpu_number.as_deref(), Some("12"));
    }

    #[test]
    fn unknown_flag_and_its_value_are_ignored() {
        let (plain, _) = parse(["fltiq", "-d", "/data", "-o", "/out"]);
        let (noisy, ignored) = parse([
            "fltiq", "-z", "foo", "-d", "/data", "--verbose", "-o", "/out", "stray",
        ]);

        assert_eq!(plain.to_params(), noisy.to_params());
        assert_eq!(strings(&ignored), vec!["-z", "foo", "--verbose", "stray"]);
    }

    #[test]
    fn unknown_flag_does_not_swallow_next_flag() {
        let filtered = retain_recognized(["fltiq", "-z", "-d", "/data"]);
        assert_eq!(strings(&filtered.kept), vec!["fltiq", "-d", "/data"]);
        assert_eq!(strings(&filtered.ignored), vec!["-z"]);
    }

    #[test]
    fn trailing_flag_without_value_is_dropped() {
        let (args, ignored) = parse(["fltiq", "-o", "/out", "-d"]);
        assert_eq!(args.data_dir, None);
        assert_eq!(strings(&ignored), vec!["-d"]);
    }

    #[test]
    fn value_may_start_with_dash() {
        let (args, _) = parse(["fltiq", "-n", "-weird-", "-d", "/data"]);
        assert_eq!(args.proj_name.as_deref(), Some("-weird-"));
        assert_eq!(args.data_dir.as_deref(), Some("/data"));
    }

    #[test]
    fn everything_after_double_dash_is_ignored() {
        let filtered = retain_recognized(["fltiq", "-d", "/data", "--", "-o", "/out"]);
        assert_eq!(strings(&filtered.kept), vec!["fltiq", "-d", "/data"]);
        assert_eq!(strings(&filtered.ignored), vec!["--", "-o", "/out"]);
    }

    #[test]
    fn launcher_options_are_recognized() {
        let (args, ignored) = parse([
            "fltiq",
            "--python",
            "/usr/bin/python3",
            "--params=run.json",
            "--dry-run",
            "--log",
        ]);
        assert!(ignored.is_empty());
        assert_eq!(args.python, "/usr/bin/python3");
        assert_eq!(args.params, Some(PathBuf::from("run.json")));
        assert!(args.dry_run);
        assert!(args.log);
    }

    #[test]
    fn launcher_option_never_takes_a_flag_as_value() {
        let (args, ignored) = parse(["fltiq", "-d", "/data", "--params", "--foo", "--python"]);
        assert_eq!(args.params, None);
        assert_eq!(args.data_dir.as_deref(), Some("/data"));
        assert_eq!(strings(&ignored), vec!["--params", "--foo", "--python"]);
    }

    #[test]
    fn launcher_option_followed_by_short_flag() {
        let (args, _) = parse(["fltiq", "--params", "-d", "/data"]);
        assert_eq!(args.params, None);
        assert_eq!(args.data_dir.as_deref(), Some("/data"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_is_kept_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let argv = vec![
            OsString::from("fltiq"),
            OsString::from("-p"),
            OsString::from_vec(vec![b'8', 0xff]),
        ];
        let (args, _) = CliArgs::parse_lenient(argv).unwrap();
        assert_eq!(args.cpu_number.as_deref(), Some("8\u{fffd}"));
    }

    #[test]
    fn cluster_with_unknown_letter_keeps_known_flag() {
        let (args, ignored) = parse(["fltiq", "-zd", "/x", "-qo/out"]);
        assert_eq!(args.data_dir.as_deref(), Some("/x"));
        assert_eq!(args.output_dir.as_deref(), Some("/out"));
        assert_eq!(strings(&ignored), vec!["-z", "-q"]);
    }

    #[test]
    fn arbitrary_noise_never_fails_the_parse() {
        let noise = [
            "fltiq", "--params", "--python", "-x", "--=", "-", "--log=yes", "-qz", "--dry-run=1",
            "word", "-zzz", "--unknown=1",
        ];
        assert!(CliArgs::parse_lenient(noise).is_ok());
    }

    #[test]
    fn usage_mentions_required_flags() {
        let usage = CliArgs::usage();
        for flag in ["-d", "-o", "-s", "-a"] {
            assert!(usage.contains(flag), "usage lacks {flag}");
        }
    }
}
