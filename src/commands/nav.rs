use crate::core::{error::Result, GdirError, Session};

/// Move the history cursor backward by `steps` and print the landing path.
pub fn execute_back(steps: usize) -> Result<()> {
    navigate(Direction::Back, steps)
}

/// Move the history cursor forward by `steps` and print the landing path.
pub fn execute_fwd(steps: usize) -> Result<()> {
    navigate(Direction::Forward, steps)
}

enum Direction {
    Back,
    Forward,
}

fn navigate(direction: Direction, steps: usize) -> Result<()> {
    let mut session = Session::open()?;

    let path = match direction {
        Direction::Back => session.state.history.back(steps)?,
        Direction::Forward => session.state.history.forward(steps)?,
    };

    // A vanished target must not persist the cursor move: skip the save so
    // the on-disk cursor stays where it was.
    if !path.is_dir() {
        return Err(GdirError::stale_entry(path));
    }

    session.save()?;
    println!("{}", path.display());

    Ok(())
}
