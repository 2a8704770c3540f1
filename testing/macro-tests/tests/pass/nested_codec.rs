use spm_proto::{Message, MessageCodec, message};

#[message(
    codec,
    fields(
        repeated(ident = "entries", ty = "vocab::Entry"),
        scalar(ident = "version", ty = "i32", default = -1),
    )
)]
pub struct Vocab;

pub mod vocab {
    use spm_proto::message;

    #[message(
        name = "Vocab.Entry",
        fields(scalar(ident = "r#type", ty = "u8"), string(ident = "piece"))
    )]
    pub struct Entry;
}

fn main() {
    let mut vocab = Vocab::default();
    assert_eq!(vocab.version(), -1);

    {
        let entry = vocab.add_entries();
        entry.set_type(2);
        entry.set_piece("<s>");
    }
    vocab.add_entries().set_piece("</s>");

    assert_eq!(vocab.entries_at(0).r#type(), 2);
    assert_eq!(vocab.entries()[1].piece(), "</s>");
    assert_eq!(vocab::Entry::NAME, "Vocab.Entry");

    assert!(vocab.parse_from_array(&[1, 2, 3]).is_ok());
    assert_eq!(vocab.entries_size(), 2);
    assert!(vocab.serialize_as_string().is_empty());
}
