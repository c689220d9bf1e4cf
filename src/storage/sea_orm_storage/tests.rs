//! 基于内存 SQLite 的存储层测试

use super::SeaOrmStorage;
use crate::errors::SchoolHubError;
use crate::models::academics::requests::{AcademicSessionRequest, CreateSubjectRequest};
use crate::models::attendance::requests::AttendanceMark;
use crate::models::leaves::entities::LeaveStatus;
use crate::models::leaves::requests::ApplyLeaveRequest;
use crate::models::quiz_attempts::entities::AttemptStatus;
use crate::models::quiz_attempts::requests::NewAnswer;
use crate::models::quiz_sessions::requests::{NewQuizSession, UpdateSessionRequest};
use crate::models::quizzes::entities::QuestionType;
use crate::models::quizzes::requests::{CreateQuizRequest, NewChoice, NewQuestion};
use crate::models::results::requests::SaveResultRequest;
use crate::models::users::entities::{Gender, StaffProfile, StudentProfile, UserRole};
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::{ConnectOptions, Database};

async fn memory_storage() -> SeaOrmStorage {
    // 单连接，保证所有查询落在同一个内存库
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    SeaOrmStorage::from_connection(db).await.unwrap()
}

fn user_request(
    email: &str,
    role: UserRole,
    course_id: Option<i64>,
    session_id: Option<i64>,
) -> CreateUserRequest {
    CreateUserRequest {
        email: email.to_string(),
        password: "hashed".to_string(),
        role,
        first_name: "Ada".to_string(),
        last_name: email.split('@').next().unwrap_or_default().to_string(),
        gender: Gender::F,
        address: String::new(),
        profile_pic: None,
        course_id,
        session_id,
    }
}

struct School {
    course_id: i64,
    session_id: i64,
    subject_id: i64,
    staff: StaffProfile,
    student: StudentProfile,
}

async fn seed_school(storage: &SeaOrmStorage) -> School {
    let course = storage.create_course("Computer Science").await.unwrap();
    let session = storage
        .create_academic_session(AcademicSessionRequest {
            start_year: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_year: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        })
        .await
        .unwrap();

    let staff_user = storage
        .create_user(user_request("teacher@school.test", UserRole::Staff, Some(course.id), None))
        .await
        .unwrap();
    let staff = storage.get_staff_by_user_id(staff_user.id).await.unwrap().unwrap();

    let student_user = storage
        .create_user(user_request(
            "pupil@school.test",
            UserRole::Student,
            Some(course.id),
            Some(session.id),
        ))
        .await
        .unwrap();
    let student = storage
        .get_student_by_user_id(student_user.id)
        .await
        .unwrap()
        .unwrap();

    let subject = storage
        .create_subject(CreateSubjectRequest {
            name: "Algorithms".to_string(),
            staff_id: staff.id,
            course_id: course.id,
        })
        .await
        .unwrap();

    School {
        course_id: course.id,
        session_id: session.id,
        subject_id: subject.id,
        staff,
        student,
    }
}

fn new_session(quiz_id: i64, created_by: i64, code: &str, max_attempts: i32) -> NewQuizSession {
    NewQuizSession {
        quiz_id,
        created_by,
        session_code: code.to_string(),
        is_active: true,
        starts_at: None,
        ends_at: None,
        max_attempts_per_student: max_attempts,
    }
}

async fn seed_quiz(storage: &SeaOrmStorage, school: &School) -> i64 {
    let quiz = storage
        .create_quiz(
            school.staff.id,
            CreateQuizRequest {
                subject_id: school.subject_id,
                title: "Sorting".to_string(),
                description: None,
                duration_minutes: Some(15),
            },
        )
        .await
        .unwrap();

    storage
        .create_questions(
            quiz.id,
            vec![NewQuestion {
                text: "Stable sort?".to_string(),
                question_type: QuestionType::Single,
                marks: 2.0,
                order: 0,
                choices: vec![
                    NewChoice {
                        text: "Merge sort".to_string(),
                        is_correct: true,
                    },
                    NewChoice {
                        text: "Heap sort".to_string(),
                        is_correct: false,
                    },
                ],
            }],
        )
        .await
        .unwrap();

    quiz.id
}

#[tokio::test]
async fn test_user_is_created_with_profile() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;

    assert_eq!(school.staff.course_id, Some(school.course_id));
    assert_eq!(school.student.course_id, Some(school.course_id));
    assert_eq!(school.student.session_id, Some(school.session_id));
    assert_eq!(storage.count_users().await.unwrap(), 2);
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let storage = memory_storage().await;
    storage
        .create_user(user_request("dup@school.test", UserRole::Admin, None, None))
        .await
        .unwrap();

    let err = storage
        .create_user(user_request("dup@school.test", UserRole::Admin, None, None))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::Conflict(_)));
    assert_eq!(storage.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_roster_and_student_count_follow_course() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;

    let roster = storage
        .list_roster(school.course_id, school.session_id)
        .await
        .unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, school.student.id);
    assert_eq!(
        storage.count_students_in_course(school.course_id).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn test_saving_attendance_never_overwrites() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;
    let date = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();

    let first = storage
        .save_attendance(
            school.subject_id,
            school.session_id,
            date,
            &[AttendanceMark {
                student_id: school.student.id,
                status: true,
            }],
        )
        .await
        .unwrap();
    assert_eq!(first.created, 1);

    let second = storage
        .save_attendance(
            school.subject_id,
            school.session_id,
            date,
            &[AttendanceMark {
                student_id: school.student.id,
                status: false,
            }],
        )
        .await
        .unwrap();
    assert_eq!(second.attendance_id, first.attendance_id);
    assert_eq!(second.created, 0);
    assert_eq!(second.unchanged, 1);

    let reports = storage
        .list_attendance_reports(first.attendance_id)
        .await
        .unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].status);
}

#[tokio::test]
async fn test_session_code_is_unique() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;
    let quiz_id = seed_quiz(&storage, &school).await;

    storage
        .create_quiz_session(new_session(quiz_id, school.staff.id, "ABC234", 1))
        .await
        .unwrap();
    assert!(storage.session_code_exists("ABC234").await.unwrap());
    assert!(!storage.session_code_exists("ZZZ999").await.unwrap());

    let err = storage
        .create_quiz_session(new_session(quiz_id, school.staff.id, "ABC234", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::Conflict(_)));
}

#[tokio::test]
async fn test_attempts_never_exceed_limit() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;
    let quiz_id = seed_quiz(&storage, &school).await;
    let session = storage
        .create_quiz_session(new_session(quiz_id, school.staff.id, "KQ7M2X", 2))
        .await
        .unwrap();

    let first = storage
        .create_attempt(session.id, school.student.id, 2)
        .await
        .unwrap()
        .unwrap();
    let second = storage
        .create_attempt(session.id, school.student.id, 2)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.attempt_no, 1);
    assert_eq!(second.attempt_no, 2);

    let third = storage
        .create_attempt(session.id, school.student.id, 2)
        .await
        .unwrap();
    assert!(third.is_none());
    assert_eq!(
        storage
            .count_student_attempts(session.id, school.student.id)
            .await
            .unwrap(),
        2
    );
}

#[tokio::test]
async fn test_finish_attempt_only_once() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;
    let quiz_id = seed_quiz(&storage, &school).await;
    let session = storage
        .create_quiz_session(new_session(quiz_id, school.staff.id, "PW3RT8", 1))
        .await
        .unwrap();
    let attempt = storage
        .create_attempt(session.id, school.student.id, 1)
        .await
        .unwrap()
        .unwrap();

    let questions = storage.list_questions_with_choices(quiz_id).await.unwrap();
    let question = &questions[0];
    let correct = question.choices.iter().find(|c| c.is_correct).unwrap();

    let finished = storage
        .finish_attempt(
            attempt.id,
            AttemptStatus::Submitted,
            2.0,
            vec![NewAnswer {
                question_id: question.question.id,
                selected_choice_id: Some(correct.id),
                text_answer: String::new(),
            }],
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(finished.status, AttemptStatus::Submitted);
    assert_eq!(finished.score, 2.0);
    assert!(finished.submitted_at.is_some());

    let again = storage
        .finish_attempt(attempt.id, AttemptStatus::Submitted, 0.0, Vec::new())
        .await
        .unwrap();
    assert!(again.is_none());

    let submitted = storage.list_submitted_attempts(session.id).await.unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].student_id, school.student.id);

    let answers = storage
        .list_answers_for_attempts(&[attempt.id])
        .await
        .unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].selected_choice_id, Some(correct.id));
}

#[tokio::test]
async fn test_cancelled_attempts_are_not_listed() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;
    let quiz_id = seed_quiz(&storage, &school).await;
    let session = storage
        .create_quiz_session(new_session(quiz_id, school.staff.id, "HN4VB6", 3))
        .await
        .unwrap();
    let attempt = storage
        .create_attempt(session.id, school.student.id, 3)
        .await
        .unwrap()
        .unwrap();

    storage
        .finish_attempt(attempt.id, AttemptStatus::Cancelled, 0.0, Vec::new())
        .await
        .unwrap();

    assert!(storage.list_submitted_attempts(session.id).await.unwrap().is_empty());
    // 作废的答题仍计入次数
    assert_eq!(storage.count_session_attempts(session.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_result_upsert_reports_created_then_updated() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;

    let (first, created) = storage
        .upsert_result(SaveResultRequest {
            student_id: school.student.id,
            subject_id: school.subject_id,
            test: 10.0,
            exam: 50.0,
        })
        .await
        .unwrap();
    assert!(created);

    let (second, created) = storage
        .upsert_result(SaveResultRequest {
            student_id: school.student.id,
            subject_id: school.subject_id,
            test: 12.0,
            exam: 55.0,
        })
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(second.id, first.id);

    let stored = storage
        .get_result(school.student.id, school.subject_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.test, 12.0);
    assert_eq!(stored.exam, 55.0);
}

#[tokio::test]
async fn test_student_attendance_range_is_inclusive() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;
    let day = |d| NaiveDate::from_ymd_opt(2025, 10, d).unwrap();

    for (d, present) in [(5, true), (6, false), (7, true), (8, true)] {
        storage
            .save_attendance(
                school.subject_id,
                school.session_id,
                day(d),
                &[AttendanceMark {
                    student_id: school.student.id,
                    status: present,
                }],
            )
            .await
            .unwrap();
    }

    let rows = storage
        .list_student_attendance(school.student.id, school.subject_id, day(6), day(7))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, day(6));
    assert!(!rows[0].status);
    assert_eq!(rows[1].date, day(7));
    assert!(rows[1].status);
}

#[tokio::test]
async fn test_attendance_update_rolls_back_on_missing_report() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;

    let saved = storage
        .save_attendance(
            school.subject_id,
            school.session_id,
            NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
            &[AttendanceMark {
                student_id: school.student.id,
                status: true,
            }],
        )
        .await
        .unwrap();

    // 第二个学生没有这次考勤的记录，整批不生效
    let err = storage
        .update_attendance_reports(
            saved.attendance_id,
            &[
                AttendanceMark {
                    student_id: school.student.user_id,
                    status: false,
                },
                AttendanceMark {
                    student_id: 9_999,
                    status: false,
                },
            ],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolHubError::NotFound(_)));

    let reports = storage
        .list_attendance_reports(saved.attendance_id)
        .await
        .unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].status);

    let updated = storage
        .update_attendance_reports(
            saved.attendance_id,
            &[AttendanceMark {
                student_id: school.student.user_id,
                status: false,
            }],
        )
        .await
        .unwrap();
    assert_eq!(updated, 1);
}

#[tokio::test]
async fn test_leave_is_reviewed_only_once() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;

    let leave = storage
        .create_leave(
            school.student.user_id,
            ApplyLeaveRequest {
                date: "2025-10-06".to_string(),
                message: "Dentist".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(leave.status, LeaveStatus::Pending);

    let approved = storage
        .review_leave(leave.id, LeaveStatus::Approved)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    let again = storage
        .review_leave(leave.id, LeaveStatus::Rejected)
        .await
        .unwrap();
    assert!(again.is_none());

    let stored = storage.get_leave_by_id(leave.id).await.unwrap().unwrap();
    assert_eq!(stored.status, LeaveStatus::Approved);
    assert!(storage.review_leave(9_999, LeaveStatus::Approved).await.unwrap().is_none());
}

#[tokio::test]
async fn test_session_window_can_be_cleared() {
    let storage = memory_storage().await;
    let school = seed_school(&storage).await;
    let quiz_id = seed_quiz(&storage, &school).await;

    let mut new = new_session(quiz_id, school.staff.id, "WX5YZ7", 1);
    new.starts_at = Utc.with_ymd_and_hms(2025, 10, 6, 8, 0, 0).single();
    new.ends_at = Utc.with_ymd_and_hms(2025, 10, 6, 9, 0, 0).single();
    let session = storage.create_quiz_session(new).await.unwrap();
    assert!(session.ends_at.is_some());

    // 只清除结束时间，开始时间保持不变
    let updated = storage
        .update_quiz_session(
            session.id,
            UpdateSessionRequest {
                ends_at: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.starts_at, session.starts_at);
    assert!(updated.ends_at.is_none());
}
