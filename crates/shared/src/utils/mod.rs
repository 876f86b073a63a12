mod logs;

pub use self::logs::Logger;
