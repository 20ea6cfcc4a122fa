//! Result formatting for the output file.
//!
//! Line formats are fixed: the verdict is a bare `correct` or
//! `impossible`, and each set line is `label : ` followed by every name
//! with a trailing space.

use dag::{NodeSets, OrderedSet};
use std::io::{self, Write};

/// Verdict line for the cycle check.
pub fn write_verdict<W: Write>(out: &mut W, has_cycle: bool) -> io::Result<()> {
    if has_cycle {
        writeln!(out, "impossible")
    } else {
        writeln!(out, "correct")
    }
}

/// The four labeled set lines, in reporting order: past, future,
/// anticone, tips.
pub fn write_sets<W: Write>(out: &mut W, node: &str, sets: &NodeSets) -> io::Result<()> {
    write_set(out, &format!("past({})", node), &sets.past)?;
    write_set(out, &format!("future({})", node), &sets.future)?;
    write_set(out, &format!("anticone({})", node), &sets.anticone)?;
    write_set(out, "tips(G)", &sets.tips)
}

fn write_set<W: Write>(out: &mut W, label: &str, set: &OrderedSet) -> io::Result<()> {
    write!(out, "{} : ", label)?;
    for name in set.iter() {
        write!(out, "{} ", name)?;
    }
    writeln!(out)
}
