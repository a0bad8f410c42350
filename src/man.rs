//! gmv(1) manual page.
//! NAME, SYNOPSIS, DESCRIPTION and OPTIONS come from the clap definition; the
//! sections clap knows nothing about are appended as raw roff.

use clap::CommandFactory;
use clap_mangen::Man;
use std::io::{self, Write};

use crate::cli::Args;

const TRAILING_SECTIONS: &str = r#".SH ENVIRONMENT
.TP
.B VISUAL, EDITOR
Editor used for the listing when no \fB\-\-editor\fR flag or \fI<editor>\fR config
value is given. If neither is set, the first of
.B vi
or
.B nano
found on PATH is used.
.TP
.B GMV_CONFIG
Path of the XML config file, overriding the default location.
.SH FILES
.TP
.I ~/.config/gmv/config.xml
Optional configuration (editor, log_level, log_file, audit_dir, audit_log, force).
.TP
.I $TMPDIR/gmv\-log\-YYYYMMDD\-HHMMSS
Record of every rename applied by a run, with a timestamp and the working directory.
Written to \fI<audit_dir>\fR when configured.
.SH EXIT STATUS
.TP
.B 0
Success, including a run in which no name changed.
.TP
.B 1
Any error: invalid arguments, missing files, rejected edits, editor failure,
declined overwrite confirmation or a failed rename.
.SH NOTES
.PP
All edits are validated before anything is renamed:
.IP \(bu 2
the line count must match the original list
.IP \(bu 2
files cannot be moved to a different directory
.IP \(bu 2
two files cannot end up with the same name
.PP
Swaps and longer rotations (a \(-> b, b \(-> a) are carried out through a
temporary name in the same directory.
.PP
.B Overwrite protection
.PP
If a new name belongs to an existing file that is not part of the list, gmv shows
the affected files and asks for confirmation. Names freed up by the rename itself
never trigger the prompt. Use
.B \-\-force
to skip it.
"#;

/// Render the manual page into `w`.
pub fn render_man(w: &mut impl Write) -> io::Result<()> {
    Man::new(Args::command())
        .title("GMV")
        .section("1")
        .manual("User Commands")
        .render(&mut *w)?;
    w.write_all(TRAILING_SECTIONS.as_bytes())
}
