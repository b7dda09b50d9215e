use unstruct::Record;

#[derive(Record)]
struct Session {
    #[record(hidden)]
    token: String,
}

fn main() {}
