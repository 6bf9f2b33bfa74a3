//! Root document component - the complete HTML page.

use super::{
    Approach, BackgroundDeco, Contact, Credentials, Footer, Header, Hero, Services, SoftwareLab,
};
use crate::PageOptions;
use crate::content::META_DESCRIPTION;
use crate::styles::{NOSCRIPT_CSS, page_css};
use leptos::prelude::*;

/// Inline scripts and styles only; images may come from any configured base.
pub const CSP: &str = "default-src 'self'; img-src * data:; style-src 'unsafe-inline'; script-src 'unsafe-inline'; form-action 'none'";

/// The complete HTML document for the landing page.
#[component]
pub fn PageDocument(options: PageOptions) -> impl IntoView {
    let PageOptions {
        title,
        lang,
        asset_base,
        copyright_year,
    } = options;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=META_DESCRIPTION />
                <title>{title}</title>
                <style>{page_css()}</style>
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <BackgroundDeco />
                <Header />
                <main>
                    <Hero asset_base=asset_base.clone() />
                    <Credentials />
                    <Services />
                    <SoftwareLab asset_base=asset_base.clone() />
                    <Approach asset_base=asset_base />
                    <Contact />
                </main>
                <Footer year=copyright_year />
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Fire-once viewport reveals and contact form suppression.
///
/// Every `[data-trigger="in-view"]` element gets `is-revealed` the first
/// time it intersects the viewport and is then unobserved, so scrolling
/// away and back never replays it. Without `IntersectionObserver` all
/// pending elements are revealed at once.
pub const PAGE_SCRIPT: &str = r#"
(function () {
  var pending = document.querySelectorAll('[data-trigger="in-view"]:not(.is-revealed)');

  function reveal(el) {
    el.classList.add('is-revealed');
  }

  if (!('IntersectionObserver' in window)) {
    pending.forEach(reveal);
  } else {
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (!entry.isIntersecting) {
          return;
        }
        reveal(entry.target);
        observer.unobserve(entry.target);
      });
    }, { rootMargin: '0px 0px -10% 0px' });
    pending.forEach(function (el) {
      observer.observe(el);
    });
  }

  // The contact form is a shell: never submit anywhere.
  document.querySelectorAll('form[data-role="contact-form"]').forEach(function (form) {
    form.addEventListener('submit', function (event) {
      event.preventDefault();
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_unobserves_after_reveal() {
        // non-intersecting entries bail out before anything is revealed
        let guard = PAGE_SCRIPT.find("if (!entry.isIntersecting)").unwrap();
        let bail = PAGE_SCRIPT[guard..].find("return;").unwrap() + guard;
        let reveal = PAGE_SCRIPT.find("reveal(entry.target)").unwrap();
        let unobserve = PAGE_SCRIPT.find("observer.unobserve(entry.target)").unwrap();
        assert!(bail < reveal);
        assert!(reveal < unobserve);
        assert_eq!(PAGE_SCRIPT.matches("unobserve(").count(), 1);

        // the callback closes right after unobserving
        let callback_end = PAGE_SCRIPT[unobserve..].find("});").unwrap() + unobserve;
        let tail = PAGE_SCRIPT[unobserve..callback_end].trim_end();
        assert_eq!(tail, "observer.unobserve(entry.target);");
    }

    #[test]
    fn script_cancels_form_submission() {
        assert!(PAGE_SCRIPT.contains("event.preventDefault()"));
        assert!(!PAGE_SCRIPT.contains("fetch("));
        assert!(!PAGE_SCRIPT.contains("XMLHttpRequest"));
    }

    #[test]
    fn script_is_safe_inside_script_element() {
        assert!(!PAGE_SCRIPT.contains('<'));
        assert!(!PAGE_SCRIPT.contains('>'));
        assert!(!PAGE_SCRIPT.contains('&'));
    }

    #[test]
    fn csp_blocks_form_posts() {
        assert!(CSP.contains("form-action 'none'"));
    }
}
