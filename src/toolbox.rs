// Logging support

#[macro_export]
macro_rules! debug {
    (
        $($args:tt)+
    ) => {
        if cfg!(feature = "debuglog") {
            write!($($args)+).ok();
        }
    }
}

#[macro_export]
macro_rules! info {
    (
        $($args:tt)+
    ) => {
        if cfg!(feature = "infolog") || cfg!(feature = "debuglog") {
            write!($($args)+).ok();
        }
    }
}

#[macro_export]
macro_rules! error {
    (
        $($args:tt)+
    ) => {
        write!($($args)+).ok();
    }
}
