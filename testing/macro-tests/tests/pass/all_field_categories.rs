use spm_proto::prelude::*;

#[message(fields(
    scalar(ident = "count", ty = "u64", default = 3),
    scalar(ident = "enabled", ty = "bool"),
    string(ident = "label", default = "none"),
    repeated(ident = "tags", ty = "String"),
    member(ident = "inner", ty = "Inner"),
))]
/// Exercises every generator in one struct.
pub struct Outer;

#[message(debug = "name", fields(string(ident = "name")))]
pub struct Inner;

fn main() {
    let mut outer = Outer::default();
    assert_eq!(outer.count(), 3);
    assert!(!outer.enabled());
    assert_eq!(outer.label(), "none");

    outer.set_count(9);
    outer.set_enabled(true);
    outer.mutable_label().push_str("-set");
    *outer.add_tags() = "a".into();
    *outer.add_tags() = "b".into();
    outer.mutable_tags(0).push('!');
    outer.mutable_inner().set_name("inner");

    assert_eq!(outer.count(), 9);
    assert_eq!(outer.label(), "none-set");
    assert_eq!(outer.tags_size(), 2);
    assert_eq!(outer.tags_at(0), "a!");
    assert_eq!(outer.inner().utf8_debug_string(), "inner");
    assert!(outer.has_inner() && outer.has_label() && outer.has_count());

    outer.clear();
    assert_eq!(outer, Outer::default());
    assert_eq!(outer.inner().name(), "");
}
