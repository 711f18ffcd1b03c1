use super::escape;

/// Search form submitting `q` to the results route.
pub fn search_bar(initial: &str, centered: bool) -> String {
    let class = if centered { "search-bar centered" } else { "search-bar" };
    format!(
        "<form class=\"{class}\" action=\"/search\" method=\"get\" role=\"search\">\
         <input type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Search Naijpedia...\" required>\
         <button type=\"submit\" aria-label=\"Search\">Search</button>\
         </form>",
        escape(initial)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_bar() {
        let html = search_bar("Lagos \"Tech\"", true);
        assert!(html.contains("class=\"search-bar centered\""));
        assert!(html.contains("action=\"/search\""));
        assert!(html.contains("name=\"q\" value=\"Lagos &quot;Tech&quot;\""));
        assert!(search_bar("", false).contains("class=\"search-bar\""));
    }
}
