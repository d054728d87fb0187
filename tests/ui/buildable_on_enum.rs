#[formwork::buildable]
enum NotAStruct {
    One,
    Two,
}

fn main() {}
