//! Reverse routing: producing a path from a route name.

use crate::{
    dispatcher::Dispatcher,
    error::BadRoute,
    matcher::RouteMatcher,
    params::ParamSource,
    segment::Segment,
    table::NamedRoute,
};

impl<H, M, S: RouteMatcher<H, M>> Dispatcher<H, M, S> {
    /// Produce the path of the route registered as `name`.
    ///
    /// Static names are returned verbatim and never consult `params`. For
    /// names with several options the most recently registered option is
    /// tried first; the first one whose placeholders are all present in
    /// `params` wins. If none succeeds, the error of the last option tried
    /// (the earliest registered) is returned.
    ///
    /// # Errors
    ///
    /// [`BadRoute::UnknownName`] when `name` is not registered,
    /// [`BadRoute::MissingParameter`] when no option can be filled.
    pub fn path_for<P: ParamSource + ?Sized>(&self, name: &str, params: &P) -> Result<String, BadRoute> {
        let options = match self.table.named(name) {
            Some(NamedRoute::Static(path)) => return Ok(path.clone()),
            Some(NamedRoute::Options(options)) => options,
            None => return Err(BadRoute::UnknownName(name.to_owned())),
        };

        let mut last_error = None;
        for option in options.iter().rev() {
            match produce(option, params) {
                Ok(path) => return Ok(path),
                Err(err) => last_error = Some(err),
            }
        }

        Err(last_error.unwrap_or_else(|| BadRoute::UnknownName(name.to_owned())))
    }
}

/// Fill one template option, failing on the first missing placeholder.
fn produce<P: ParamSource + ?Sized>(segments: &[Segment], params: &P) -> Result<String, BadRoute> {
    let mut path = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => path.push_str(text),
            Segment::Placeholder { name, .. } => {
                let value = params
                    .param(name)
                    .ok_or_else(|| BadRoute::MissingParameter(name.clone()))?;
                path.push_str(&value);
            }
        }
    }
    Ok(path)
}
