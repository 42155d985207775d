// Logging macros that compile to nothing unless the 'logging' feature is
// enabled. This lets the rest of the crate sprinkle debug!/trace! calls around
// without dragging the 'log' crate into every build.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}

// A simple macro for defining bitfield accessors/mutators. The type using it
// must have a `bools` field of an unsigned integer type.
macro_rules! define_bool {
    ($bit:expr, $is_fn_name:ident, $set_fn_name:ident) => {
        pub fn $is_fn_name(&self) -> bool {
            self.bools & (0b1 << $bit) > 0
        }

        pub(crate) fn $set_fn_name(&mut self, yes: bool) {
            if yes {
                self.bools |= 1 << $bit;
            } else {
                self.bools &= !(1 << $bit);
            }
        }
    };
}
