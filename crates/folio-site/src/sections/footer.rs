#![forbid(unsafe_code)]

use folio_runtime::Frame;

use super::ViewContext;

pub fn view(frame: &mut Frame, ctx: &ViewContext<'_>) {
    let t = ctx.t;
    let profile = ctx.profile;
    frame.with("footer", &[("class", "site-footer")], |f| {
        let copyright = format!(
            "© {} {}. {}",
            profile.copyright_year,
            profile.name,
            t.t("footer.copyright")
        );
        f.element("p", &[("class", "footer-copyright")], &copyright);
        f.with("p", &[("class", "footer-made-with")], |f| {
            f.text(&t.t("footer.madeWith"));
            f.raw(" ");
            f.element("span", &[("class", "heart"), ("aria-hidden", "true")], "♥");
            f.raw(" ");
            f.text(&t.t_args("footer.by", &[("name", profile.name.as_str())]));
        });
        f.with("ul", &[("class", "footer-links")], |f| {
            for link in &profile.social {
                f.with("li", &[], |f| {
                    f.element(
                        "a",
                        &[
                            ("href", link.url.as_str()),
                            ("target", "_blank"),
                            ("rel", "noopener noreferrer"),
                        ],
                        link.kind.label(),
                    );
                });
            }
            let mailto = profile.mailto_url();
            f.with("li", &[], |f| {
                f.element("a", &[("href", mailto.as_str())], &t.t("contact.email"));
            });
        });
    });
}
