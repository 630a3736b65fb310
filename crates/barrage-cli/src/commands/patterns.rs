//! Patterns command - lists the spawn patterns and their presets

use anyhow::Result;
use barrage_patterns::{ParamField, PatternKind};

pub fn run() -> Result<()> {
    print!("{:<3} {:<10}", "#", "PATTERN");
    for field in ParamField::ALL {
        print!(" {:>13}", field.label());
    }
    println!();

    for kind in PatternKind::ALL {
        let preset = kind.preset();
        print!("{:<3} {:<10}", kind.index() + 1, kind.name());
        for field in ParamField::ALL {
            let value = preset.get(field);
            if field.is_integer() {
                print!(" {:>13}", value as u32);
            } else {
                print!(" {:>13.2}", value);
            }
        }
        println!();
    }

    println!();
    println!("Wave and Targeting spread their projectiles edge to edge;");
    println!("the others divide the spread into equal slices.");
    Ok(())
}
