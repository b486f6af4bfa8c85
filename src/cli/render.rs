use std::io::{self, Write};

use crate::domain::{format_amount, Item, Participant};
use crate::io::table::{truncate, RULE_WIDTH};

pub const INSTRUCTIONS: &str = "\
This tool will help you split your bills. Follow the instructions below:
1. Start with entering the total bill amount.
2. Then enter the names of the people participating in the bill in the format: <name1>,<name2>,<name3>...
3. Proceed to enter each entry following the format:
   <item-name>:<price>:<person1>,<person2>,...   (use 'all' to split between everyone)
4. If you'd like to delete any entry, enter 'remove'/'r'.
5. If you'd like to list all people, enter 'list people'/'lp'.
6. If you'd like to list all the entries recorded, enter 'list entry'/'le'.
7. When you'd like the bill split, enter 'done'/'d'.
8. To view instructions again, enter 'print instructions'/'p'.
9. To quit, enter 'quit'/'q'.

Note: Common expenses like tax will be scaled according to each person's expenditure.";

pub fn render_entries<W: Write>(out: &mut W, items: &[Item]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "List of entries:")?;
    if items.is_empty() {
        writeln!(out, "No entries recorded.")?;
        return writeln!(out);
    }

    writeln!(out, "{:<3} | {:<15} | {:>10} | {}", "#", "NAME", "PRICE", "SPLIT BETWEEN")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (index, item) in items.iter().enumerate() {
        writeln!(
            out,
            "{:<3} | {:<15} | {:>10} | {}",
            index,
            truncate(&item.name, 15),
            format_amount(item.price),
            item.sharers.join(" ")
        )?;
    }
    writeln!(out)
}

pub fn render_participants<W: Write>(out: &mut W, participants: &[Participant]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "List of people:")?;
    let line = participants
        .iter()
        .enumerate()
        .map(|(index, p)| format!("{}. {}", index, p.name))
        .collect::<Vec<_>>()
        .join("   ");
    writeln!(out, "{}", line)?;
    writeln!(out)
}
