/// One `--ingredient` argument: `<name>=<quantity>[ <unit>]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientSpec {
    /// Search text used to find the ingredient.
    pub query: String,
    /// Quantity as typed; non-numeric text becomes 0 when added.
    pub quantity: String,
    /// Unit name or abbreviation, if given.
    pub unit: Option<String>,
}

impl IngredientSpec {
    /// Parse a spec. The last `=` splits name from amount, so names may contain `=`.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let (query, amount) = match text.rsplit_once('=') {
            Some((query, amount)) => (query.trim(), amount.trim()),
            None => (text.trim(), ""),
        };
        if query.is_empty() {
            anyhow::bail!("invalid --ingredient '{text}': missing ingredient name");
        }

        let mut parts = amount.splitn(2, char::is_whitespace);
        let quantity = parts.next().unwrap_or_default().to_string();
        let unit = parts
            .next()
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .map(str::to_string);

        Ok(Self {
            query: query.to_string(),
            quantity,
            unit,
        })
    }
}
