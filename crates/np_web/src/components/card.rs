use super::escape;

#[derive(Debug, Clone, Default)]
pub struct CardOptions<'a> {
    pub hover: bool,
    /// Whole-card click target.
    pub href: Option<&'a str>,
    pub class: &'a str,
}

/// Glass panel shell. With `href` the whole card is a link.
pub fn card(body: &str, options: &CardOptions<'_>) -> String {
    let mut classes = String::from("glass-card");
    if options.hover {
        classes.push_str(" hoverable");
    }
    if !options.class.is_empty() {
        classes.push(' ');
        classes.push_str(options.class);
    }

    match options.href {
        Some(href) => format!(
            "<article class=\"{}\"><a class=\"card-link\" href=\"{}\"></a>{}</article>",
            escape(&classes),
            escape(href),
            body
        ),
        None => format!("<article class=\"{}\">{}</article>", escape(&classes), body),
    }
}
