mod memory;
mod single;
