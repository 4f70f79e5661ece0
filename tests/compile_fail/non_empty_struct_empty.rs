//! Test that combining zero labelled computations into a record is rejected.

fn main() {
    let _ = typekind::non_empty_struct!(typekind::data::OptionTypeLambda;);
}
