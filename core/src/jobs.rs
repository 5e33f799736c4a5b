/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, Func, LikeExpr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};
use uuid::Uuid;

use super::consts::{DEFAULT_PAGE, MAX_PAGE_SIZE};
use super::input::{escape_like, non_empty};
use super::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineOrder {
    Ascending,
    Descending,
}

impl DeadlineOrder {
    /// `asc` sorts ascending, any other non-empty value descending.
    pub fn parse(value: Option<String>) -> Option<Self> {
        non_empty(value).map(|v| {
            if v.eq_ignore_ascii_case("asc") {
                DeadlineOrder::Ascending
            } else {
                DeadlineOrder::Descending
            }
        })
    }

    fn order(self) -> Order {
        match self {
            DeadlineOrder::Ascending => Order::Asc,
            DeadlineOrder::Descending => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub size: u64,
}

impl Pagination {
    /// Pages are 1-based. Without a size the listing is not paginated.
    pub fn new(page: Option<u64>, size: Option<u64>) -> Result<Option<Self>, String> {
        let page = page.unwrap_or(DEFAULT_PAGE);

        if page == 0 {
            return Err("Page numbers start at 1".to_string());
        }

        let Some(size) = size else {
            return Ok(None);
        };

        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(format!("Page size must be between 1 and {}", MAX_PAGE_SIZE));
        }

        // The offset is bound as a signed BIGINT.
        let fits = (page - 1)
            .checked_mul(size)
            .is_some_and(|offset| i64::try_from(offset).is_ok());

        if !fits {
            return Err("Page number is too large".to_string());
        }

        Ok(Some(Pagination { page, size }))
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.size
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl JobFilter {
    pub fn new(category: Option<String>, search: Option<String>) -> Self {
        JobFilter {
            category: non_empty(category),
            search: non_empty(search),
        }
    }

    /// Narrows `select` to the jobs matching this filter.
    pub fn apply(&self, mut select: Select<EJob>) -> Select<EJob> {
        if let Some(search) = &self.search {
            let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(CJob::Title)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        if let Some(category) = &self.category {
            select = select.filter(CJob::Category.eq(category.clone()));
        }

        select
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobListing {
    pub filter: JobFilter,
    pub order: Option<DeadlineOrder>,
    pub pagination: Option<Pagination>,
}

impl JobListing {
    pub fn select(&self) -> Select<EJob> {
        let mut select = self.filter.apply(EJob::find());

        if let Some(order) = self.order {
            select = select.order_by(CJob::Deadline, order.order());
        }

        if let Some(pagination) = self.pagination {
            select = select.offset(pagination.offset()).limit(pagination.size);
        }

        select
    }
}

/// Form fields shared by job creation and the edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFields {
    pub title: String,
    pub category: String,
    pub deadline: DateTime<Utc>,
    pub min_price: f64,
    pub max_price: f64,
    pub description: String,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_photo: String,
}

impl JobFields {
    fn matches(&self, job: &MJob) -> bool {
        self.title == job.title
            && self.category == job.category
            && self.deadline == job.deadline
            && self.min_price == job.min_price
            && self.max_price == job.max_price
            && self.description == job.description
            && self.buyer_name == job.buyer_name
            && self.buyer_email == job.buyer_email
            && self.buyer_photo == job.buyer_photo
    }

    fn apply(self, ajob: &mut AJob) {
        ajob.title = Set(self.title);
        ajob.category = Set(self.category);
        ajob.deadline = Set(self.deadline);
        ajob.min_price = Set(self.min_price);
        ajob.max_price = Set(self.max_price);
        ajob.description = Set(self.description);
        ajob.buyer_name = Set(self.buyer_name);
        ajob.buyer_email = Set(self.buyer_email);
        ajob.buyer_photo = Set(self.buyer_photo);
    }

    fn into_active_model(self, id: Uuid) -> AJob {
        AJob {
            id: Set(id),
            title: Set(self.title),
            category: Set(self.category),
            deadline: Set(self.deadline),
            min_price: Set(self.min_price),
            max_price: Set(self.max_price),
            description: Set(self.description),
            buyer_name: Set(self.buyer_name),
            buyer_email: Set(self.buyer_email),
            buyer_photo: Set(self.buyer_photo),
            bid_count: Set(0),
            created_at: Set(Utc::now()),
        }
    }
}

pub async fn list_jobs(db: &DatabaseConnection, listing: &JobListing) -> Result<Vec<MJob>, DbErr> {
    listing.select().all(db).await
}

pub async fn count_jobs(db: &DatabaseConnection, filter: &JobFilter) -> Result<u64, DbErr> {
    filter.apply(EJob::find()).count(db).await
}

pub async fn get_jobs(db: &DatabaseConnection) -> Result<Vec<MJob>, DbErr> {
    EJob::find().all(db).await
}

pub async fn get_jobs_by_buyer(db: &DatabaseConnection, email: &str) -> Result<Vec<MJob>, DbErr> {
    EJob::find()
        .filter(CJob::BuyerEmail.eq(email))
        .all(db)
        .await
}

pub async fn get_job(db: &DatabaseConnection, id: Uuid) -> Result<Option<MJob>, DbErr> {
    EJob::find_by_id(id).one(db).await
}

pub async fn insert_job(db: &DatabaseConnection, fields: JobFields) -> Result<MJob, DbErr> {
    let job = fields.into_active_model(Uuid::new_v4()).insert(db).await?;
    tracing::info!(job = %job.id, buyer = %job.buyer_email, "Job posted");
    Ok(job)
}

/// Replaces the form fields of a job, or inserts it under `id` when it does not exist.
pub async fn upsert_job(
    db: &DatabaseConnection,
    id: Uuid,
    fields: JobFields,
) -> Result<UpdateResult, DbErr> {
    let txn = db.begin().await?;

    let result = match EJob::find_by_id(id).one(&txn).await? {
        Some(job) if fields.matches(&job) => UpdateResult {
            matched_count: 1,
            modified_count: 0,
            upserted_id: None,
        },
        Some(job) => {
            let mut ajob: AJob = job.into();
            fields.apply(&mut ajob);
            ajob.update(&txn).await?;

            UpdateResult {
                matched_count: 1,
                modified_count: 1,
                upserted_id: None,
            }
        }
        None => {
            // A concurrent upsert of the same id may have inserted it meanwhile.
            EJob::insert(fields.into_active_model(id))
                .on_conflict(
                    OnConflict::column(CJob::Id)
                        .update_columns([
                            CJob::Title,
                            CJob::Category,
                            CJob::Deadline,
                            CJob::MinPrice,
                            CJob::MaxPrice,
                            CJob::Description,
                            CJob::BuyerName,
                            CJob::BuyerEmail,
                            CJob::BuyerPhoto,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;

            UpdateResult {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(id),
            }
        }
    };

    txn.commit().await?;
    Ok(result)
}

pub async fn delete_job(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    let result = EJob::delete_by_id(id).exec(db).await?;

    Ok(DeleteResult {
        deleted_count: result.rows_affected,
    })
}
