use core::fmt;

use outcome_rail::traits::Describe;

struct Code(u16);

impl Describe for Code {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}", self.0)
    }
}

#[test]
fn display_types_are_describable() {
    assert_eq!("plain".description().to_string(), "plain");
    assert_eq!(String::from("owned").description().to_string(), "owned");
    assert_eq!(404_u16.description().to_string(), "404");
}

#[test]
fn std_errors_are_describable() {
    let io = std::io::Error::other("pipe closed");
    assert_eq!(Describe::description(&io).to_string(), "pipe closed");
}

#[test]
fn custom_describe_impl_is_used() {
    assert_eq!(Code(503).description().to_string(), "code 503");
}

#[test]
fn description_respects_formatter_padding() {
    assert_eq!(format!("{:>6}", "ab".description()), "    ab");
}

#[test]
fn description_debug_shows_rendered_text() {
    assert_eq!(format!("{:?}", Code(1).description()), "Description(code 1)");
}
