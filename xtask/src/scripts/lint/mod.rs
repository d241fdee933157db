use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;

/// One stage of `cargo xtask lint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Fmt,
    Clippy,
    Test,
}

impl Step {
    const ORDER: [Step; 3] = [Step::Fmt, Step::Clippy, Step::Test];

    fn cargo_args(self) -> &'static [&'static str] {
        match self {
            Step::Fmt => &["fmt", "--all", "--check"],
            Step::Clippy => &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            Step::Test => &["test", "--workspace"],
        }
    }

    fn label(self) -> String {
        format!("cargo {}", self.cargo_args().join(" "))
    }
}

fn selected_steps(args: &LintArgs) -> Vec<Step> {
    Step::ORDER
        .into_iter()
        .filter(|step| match step {
            Step::Fmt => !args.no_fmt,
            Step::Clippy => !args.no_clippy,
            Step::Test => !args.no_test,
        })
        .collect()
}

/// Run the selected steps in order, stopping at the first failure.
pub fn run(args: &LintArgs) -> Result<()> {
    for step in selected_steps(args) {
        if args.verbose {
            println!("==> {}", step.label());
        }

        let status = cmd("cargo", step.cargo_args()).unchecked().run()?.status;
        if !status.success() {
            return Err(eyre!("lint failed at: {}", step.label()));
        }
    }

    Ok(())
}
