//! 答题记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub session_id: i64,
    pub student_id: i64,
    pub attempt_no: i32,
    pub status: String,
    pub started_at: i64,
    pub submitted_at: Option<i64>,
    pub score: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz_sessions::Entity",
        from = "Column::SessionId",
        to = "super::quiz_sessions::Column::Id"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(has_many = "super::answers::Entity")]
    Answers,
}

impl Related<super::quiz_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_quiz_attempt(self) -> crate::models::quiz_attempts::entities::QuizAttempt {
        use crate::models::quiz_attempts::entities::{AttemptStatus, QuizAttempt};

        QuizAttempt {
            id: self.id,
            session_id: self.session_id,
            student_id: self.student_id,
            attempt_no: self.attempt_no,
            status: self
                .status
                .parse::<AttemptStatus>()
                .unwrap_or(AttemptStatus::Cancelled),
            started_at: super::to_datetime(self.started_at),
            submitted_at: self.submitted_at.map(super::to_datetime),
            score: self.score,
        }
    }
}
