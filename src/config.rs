/// Compile-time knobs for a tree, picked through its type parameter.
pub trait ConfigT {
    const DEBUG: bool;
    const CHECK_INVARIANTS: bool; // verify order, balance and height caches after every mutation
}

#[macro_export]
macro_rules! debug {
    ($writer:expr, $($arg:tt)+) => {
        if Config::DEBUG {
            match $writer {
                Some(ref w) => {
                    use std::fmt::Write as _;
                    let _ = writeln!(w.borrow_mut(), $($arg)+);
                }
                None => {
                    eprintln!($($arg)+);
                }
            }
        }
    };

    ($($arg:tt)+) => {
        if Config::DEBUG {
            eprintln!($($arg)+);
        }
    };
}

pub struct QuietConfig {}
pub struct DebugConfig {}

impl ConfigT for QuietConfig {
    const DEBUG: bool = false;
    const CHECK_INVARIANTS: bool = false;
}

impl ConfigT for DebugConfig {
    const DEBUG: bool = true;
    const CHECK_INVARIANTS: bool = true;
}
