// English orthography tables

pub mod constants;
