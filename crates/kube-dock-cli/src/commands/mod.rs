mod dockerfile;

pub use dockerfile::dockerfile;
