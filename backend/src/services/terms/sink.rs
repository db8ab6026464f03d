use actix_web::HttpResponse;
use common::term::sink::DocumentSink;

const PRINT_SCRIPT: &str =
    "<script>window.addEventListener('load',function(){setTimeout(function(){window.print();},500);});</script>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    View,
    Print,
}

/// Collects the composed term and hands it back as a `text/html` response.
pub struct HtmlResponseSink {
    mode: PrintMode,
    html: Option<String>,
}

impl HtmlResponseSink {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode, html: None }
    }

    pub fn into_response(self) -> HttpResponse {
        match self.html {
            Some(html) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(html),
            None => HttpResponse::InternalServerError().body("Nenhum documento gerado"),
        }
    }
}

impl DocumentSink for HtmlResponseSink {
    fn render(&mut self, html: String) {
        self.html = Some(match self.mode {
            PrintMode::View => html,
            PrintMode::Print => with_print_trigger(html),
        });
    }
}

/// Puts the print script right before `</body>`, or at the end of a
/// fragment that has none.
fn with_print_trigger(mut html: String) -> String {
    match html.rfind("</body>") {
        Some(at) => html.insert_str(at, PRINT_SCRIPT),
        None => html.push_str(PRINT_SCRIPT),
    }
    html
}
