//! 测验场次实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    pub created_by: i64,
    #[sea_orm(unique)]
    pub session_code: String,
    pub is_active: bool,
    pub starts_at: Option<i64>,
    pub ends_at: Option<i64>,
    pub max_attempts_per_student: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quizzes::Entity",
        from = "Column::QuizId",
        to = "super::quizzes::Column::Id"
    )]
    Quiz,
    #[sea_orm(has_many = "super::quiz_attempts::Entity")]
    Attempts,
}

impl Related<super::quizzes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::quiz_attempts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_quiz_session(self) -> crate::models::quiz_sessions::entities::QuizSession {
        crate::models::quiz_sessions::entities::QuizSession {
            id: self.id,
            quiz_id: self.quiz_id,
            created_by: self.created_by,
            session_code: self.session_code,
            is_active: self.is_active,
            starts_at: self.starts_at.map(super::to_datetime),
            ends_at: self.ends_at.map(super::to_datetime),
            max_attempts_per_student: self.max_attempts_per_student,
            created_at: super::to_datetime(self.created_at),
        }
    }
}
