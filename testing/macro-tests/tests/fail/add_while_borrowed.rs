use spm_proto::prelude::*;

#[message(fields(repeated(ident = "xs", ty = "u32")))]
pub struct Holder;

fn main() {
    let mut holder = Holder::default();
    let first = holder.add_xs();
    holder.add_xs();
    *first = 1;
}
