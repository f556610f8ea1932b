mod parse_good;
mod strings;
