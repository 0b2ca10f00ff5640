mod subtext;
mod title;
