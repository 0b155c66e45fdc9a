mod lookup;
mod overview;
mod scan;
