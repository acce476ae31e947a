/// Translate a board sort field into the custom service's column name.
///
/// The service orders by its own camelCase columns; fields it does not
/// rename pass through untouched and an empty field sorts by creation time.
pub fn map_sort_field(field: &str) -> &str {
    match field.trim() {
        "" => "createdAt",
        "created" | "created_at" | "createdAt" => "createdAt",
        "updated" | "updated_at" | "updatedAt" => "updatedAt",
        "lead_number" | "leadNumber" => "leadNumber",
        "name" => "customerName",
        _ => field,
    }
}
