//! 课程、科目与学年
pub mod entities;
pub mod requests;
