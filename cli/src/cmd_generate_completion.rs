// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io,
    path::{Path, PathBuf},
};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{Generator, generate, generate_to};
use clap_complete_nushell::Nushell;

use crate::Cli;

#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    /// Target shell, taken from `$SHELL` when not given.
    pub shell: Option<Shell>,

    /// Directory to write the script into instead of stdout.
    pub out_dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for gatepass")
            .hide(true)
            .arg(
                arg!(shell: [SHELL] "The shell to generate for, defaults to $SHELL")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --"out-dir" <DIR> "Write the script into this directory")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches.get_one::<Shell>("shell").copied(),
            out_dir: matches.get_one::<PathBuf>("out-dir").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let shell = match self.shell.or_else(Shell::detect) {
            Some(shell) => shell,
            None => return Err("Cannot tell the shell from $SHELL, please name one".into()),
        };

        let written = shell.write(self.out_dir.as_deref(), &mut io::stdout())?;
        if let Some(path) = written {
            eprintln!("Completion written to {}", path.display());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The shell named by the file name of `$SHELL`, e.g. `/usr/bin/zsh`.
    pub fn detect() -> Option<Self> {
        let path = PathBuf::from(std::env::var_os("SHELL")?);
        Self::from_program(&path)
    }

    fn from_program(path: &Path) -> Option<Self> {
        match path.file_stem()?.to_str()? {
            "nu" => Some(Self::Nushell),
            "pwsh" => Some(Self::PowerShell),
            name => Self::from_str(name, true).ok(),
        }
    }

    /// Writes the script to `out_dir` and returns its path, or to `buf` when
    /// there is no directory.
    pub fn write(
        self,
        out_dir: Option<&Path>,
        buf: &mut impl io::Write,
    ) -> io::Result<Option<PathBuf>> {
        use clap_complete::Shell as Builtin;

        match self {
            Self::Bash => emit(Builtin::Bash, out_dir, buf),
            Self::Elvish => emit(Builtin::Elvish, out_dir, buf),
            Self::Fish => emit(Builtin::Fish, out_dir, buf),
            Self::Nushell => emit(Nushell, out_dir, buf),
            Self::PowerShell => emit(Builtin::PowerShell, out_dir, buf),
            Self::Zsh => emit(Builtin::Zsh, out_dir, buf),
        }
    }
}

fn emit<G: Generator>(
    generator: G,
    out_dir: Option<&Path>,
    buf: &mut impl io::Write,
) -> io::Result<Option<PathBuf>> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    match out_dir {
        Some(dir) => generate_to(generator, &mut cmd, bin_name, dir).map(Some),
        None => {
            generate(generator, &mut cmd, bin_name, buf);
            Ok(None)
        }
    }
}
