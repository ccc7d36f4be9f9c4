use super::SqliteTable;
use crate::domain::listing::{Field, FilterSet, OrderKey, RankValue};
use sqlx::{QueryBuilder, Sqlite};

/// Translates a listing directive into a single SELECT.
///
/// Predicates on a field the table does not store match nothing, and order
/// keys on such a field are dropped.
pub(super) fn listing_query<R: SqliteTable>(
    filter: &FilterSet,
    order: &[OrderKey],
    limit: u32,
) -> QueryBuilder<'static, Sqlite> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {} FROM {} WHERE 1 = 1", R::COLUMNS, R::TABLE));

    if filter.exclude_deleted {
        builder.push(" AND deleted_at IS NULL");
    }

    if let Some(parent_id) = filter.parent_id.as_ref() {
        match R::PARENT_COLUMN {
            Some(column) => {
                builder.push(format!(" AND {column} = "));
                builder.push_bind(parent_id.clone());
            }
            None => {
                builder.push(" AND 0");
            }
        }
    }

    if let Some(text) = filter.text.as_deref() {
        if R::TEXT_COLUMNS.is_empty() {
            builder.push(" AND 0");
        } else {
            let pattern = format!("%{}%", escape_like(text));
            builder.push(" AND (");
            for (index, column) in R::TEXT_COLUMNS.iter().enumerate() {
                if index > 0 {
                    builder.push(" OR ");
                }
                builder.push(format!("lower(coalesce({column}, '')) LIKE "));
                builder.push_bind(pattern.clone());
                builder.push(" ESCAPE '\\'");
            }
            builder.push(")");
        }
    }

    for predicate in &filter.ranges {
        if !R::stores(predicate.field) {
            builder.push(" AND 0");
            continue;
        }
        builder.push(format!(
            " AND {} {} ",
            predicate.field.as_str(),
            predicate.operator.as_sql()
        ));
        push_value(&mut builder, &predicate.value);
    }

    let keys: Vec<String> = order
        .iter()
        .filter(|key| R::stores(key.field))
        .map(|key| format!("{} {}", key.field.as_str(), key.direction.as_sql()))
        .collect();
    if !keys.is_empty() {
        builder.push(" ORDER BY ");
        builder.push(keys.join(", "));
    }

    builder.push(" LIMIT ");
    builder.push_bind(i64::from(limit));
    builder
}

fn push_value(builder: &mut QueryBuilder<'static, Sqlite>, value: &RankValue) {
    match value {
        RankValue::Integer(value) => {
            builder.push_bind(*value);
        }
        RankValue::Float(value) => {
            builder.push_bind(*value);
        }
        RankValue::Instant(value) => {
            builder.push_bind(value.timestamp_millis());
        }
        RankValue::Text(value) => {
            builder.push_bind(value.clone());
        }
    }
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

pub(super) fn stores_field(fields: &[Field], field: Field) -> bool {
    fields.contains(&field)
}
