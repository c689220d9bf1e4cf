use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{
    AttendanceReports, Attendances, Courses, LeaveReports, Staffs, Students, Subjects,
};
use crate::entity::{attendance_reports, attendances, courses, leave_reports, students, subjects};
use crate::errors::{Result, SchoolHubError};
use crate::models::dashboard::{
    attendance_percentages,
    responses::{
        AdminDashboardResponse, CourseStudentCount, StaffDashboardResponse,
        StudentDashboardResponse, SubjectAttendanceCount, SubjectPresence,
    },
};
use crate::models::users::entities::{StaffProfile, StudentProfile};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 按科目统计考勤次数
    async fn count_attendance_by_subject(
        &self,
        subject_ids: Vec<i64>,
    ) -> Result<HashMap<i64, i64>> {
        if subject_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Attendances::find()
            .filter(attendances::Column::SubjectId.is_in(subject_ids))
            .select_only()
            .column(attendances::Column::SubjectId)
            .column_as(attendances::Column::Id.count(), "attendance_count")
            .group_by(attendances::Column::SubjectId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计科目考勤失败: {e}")))?;

        Ok(rows.into_iter().collect())
    }

    async fn subject_attendance_counts(
        &self,
        subjects: Vec<subjects::Model>,
    ) -> Result<Vec<SubjectAttendanceCount>> {
        let counts = self
            .count_attendance_by_subject(subjects.iter().map(|s| s.id).collect())
            .await?;

        Ok(subjects
            .into_iter()
            .map(|s| SubjectAttendanceCount {
                attendance_count: counts.get(&s.id).copied().unwrap_or(0),
                subject_id: s.id,
                subject_name: s.name,
            })
            .collect())
    }

    pub async fn admin_dashboard_impl(&self) -> Result<AdminDashboardResponse> {
        let map_count = |e: sea_orm::DbErr| {
            SchoolHubError::database_operation(format!("统计数量失败: {e}"))
        };

        let total_staff = Staffs::find().count(&self.db).await.map_err(map_count)? as i64;
        let total_students = Students::find().count(&self.db).await.map_err(map_count)? as i64;
        let total_courses = Courses::find().count(&self.db).await.map_err(map_count)? as i64;

        let all_subjects = Subjects::find()
            .order_by_asc(subjects::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询科目列表失败: {e}")))?;
        let total_subjects = all_subjects.len() as i64;
        let subject_attendance = self.subject_attendance_counts(all_subjects).await?;

        let per_course: HashMap<i64, i64> = Students::find()
            .filter(students::Column::CourseId.is_not_null())
            .select_only()
            .column(students::Column::CourseId)
            .column_as(students::Column::Id.count(), "student_count")
            .group_by(students::Column::CourseId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计课程学生失败: {e}")))?
            .into_iter()
            .collect();

        let course_students = Courses::find()
            .order_by_asc(courses::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询课程列表失败: {e}")))?
            .into_iter()
            .map(|c| CourseStudentCount {
                student_count: per_course.get(&c.id).copied().unwrap_or(0),
                course_id: c.id,
                course_name: c.name,
            })
            .collect();

        Ok(AdminDashboardResponse {
            total_staff,
            total_students,
            total_courses,
            total_subjects,
            subject_attendance,
            course_students,
        })
    }

    pub async fn staff_dashboard_impl(
        &self,
        staff: &StaffProfile,
    ) -> Result<StaffDashboardResponse> {
        let total_students = match staff.course_id {
            Some(course_id) => self.count_students_in_course_impl(course_id).await?,
            None => 0,
        };

        let total_leaves = LeaveReports::find()
            .filter(leave_reports::Column::UserId.eq(staff.user_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计请假数量失败: {e}")))?
            as i64;

        let taught = Subjects::find()
            .filter(subjects::Column::StaffId.eq(staff.id))
            .order_by_asc(subjects::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询科目列表失败: {e}")))?;
        let total_subjects = taught.len() as i64;

        let subject_attendance = self.subject_attendance_counts(taught).await?;
        let total_attendance = subject_attendance.iter().map(|s| s.attendance_count).sum();

        Ok(StaffDashboardResponse {
            total_students,
            total_leaves,
            total_subjects,
            total_attendance,
            subject_attendance,
        })
    }

    pub async fn student_dashboard_impl(
        &self,
        student: &StudentProfile,
    ) -> Result<StudentDashboardResponse> {
        // (科目ID, 是否出勤)
        let marks: Vec<(i64, bool)> = AttendanceReports::find()
            .filter(attendance_reports::Column::StudentId.eq(student.id))
            .inner_join(Attendances)
            .select_only()
            .column(attendances::Column::SubjectId)
            .column(attendance_reports::Column::Status)
            .into_tuple::<(i64, bool)>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("查询学生考勤失败: {e}")))?;

        let total_attendance = marks.len() as i64;
        let total_present = marks.iter().filter(|(_, present)| *present).count() as i64;
        let (percent_present, percent_absent) =
            attendance_percentages(total_present, total_attendance);

        let mut per_subject: HashMap<i64, (i64, i64)> = HashMap::new();
        for (subject_id, present) in marks {
            let entry = per_subject.entry(subject_id).or_default();
            if present {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }

        let course_subjects = match student.course_id {
            Some(course_id) => Subjects::find()
                .filter(subjects::Column::CourseId.eq(course_id))
                .order_by_asc(subjects::Column::Name)
                .all(&self.db)
                .await
                .map_err(|e| {
                    SchoolHubError::database_operation(format!("查询科目列表失败: {e}"))
                })?,
            None => Vec::new(),
        };

        let subjects = course_subjects
            .into_iter()
            .map(|s| {
                let (present, absent) = per_subject.get(&s.id).copied().unwrap_or((0, 0));
                SubjectPresence {
                    subject_id: s.id,
                    subject_name: s.name,
                    present,
                    absent,
                }
            })
            .collect::<Vec<_>>();

        Ok(StudentDashboardResponse {
            total_attendance,
            total_present,
            total_absent: total_attendance - total_present,
            percent_present,
            percent_absent,
            total_subjects: subjects.len() as i64,
            subjects,
        })
    }

    /// 课程中的学生人数
    pub async fn count_students_in_course_impl(&self, course_id: i64) -> Result<i64> {
        let count = Students::find()
            .filter(students::Column::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("统计课程学生失败: {e}")))?;

        Ok(count as i64)
    }
}
