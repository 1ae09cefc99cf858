//! The questionnaire the degree classification model was trained on.
//!
//! Every label below is matched byte-for-byte against form answers, and
//! the order of fields and categories fixes the feature vector layout.
//! Do not edit or reorder without retraining the scaler and model.

use super::registry::FieldDefinition;

pub const AGE_AT_ENROLLMENT: &[(&str, i64)] = &[
    ("18 - 20 years", 1),
    ("21 - 23 years", 2),
    ("24 - 26 years", 3),
    ("26 years and above", 4),
];

pub const GENDER: &[&str] = &["Female", "Male", "Other"];

pub const SYLLABUS_MEDIUM: &[&str] = &[
    "Local Government Syllabus (Sri Lankan : English)",
    "Local Government Syllabus (Sri Lankan : Tamil)",
    "Local Government Syllabus (Sri Lankan : Sinhala)",
    "Other",
    "Cambridge International (CIE) or Edexcel (Pearson)",
];

pub const O_LEVEL_CORE_MODULE_PASS: &[(&str, i64)] = &[
    ("Yes, I achieved a minimum 'C' pass in all three subjects", 1),
    ("No, I did not achieve a minimum 'C' pass in one or more of these subjects", 0),
];

pub const AL_STREAM: &[&str] = &[
    "Mathematics Stream",
    "Commerce Stream",
    "Science Stream",
    "Didn't take the A - Level examinations",
    "Technology Stream",
    "Arts Stream",
];

pub const YES_NO_PASS: &[(&str, i64)] = &[("Yes", 1), ("No", 0)];

pub const AL_ENGLISH_OR_COURSE: &[&str] = &[
    "No, I did not follow A-Level English or any English course",
    "Yes, I studied A-Level English",
    "Yes, I completed an English course",
    "Yes, I followed both A-Level English and completed an English course",
];

pub const PRIOR_HIGHER_EDU: &[(&str, i64)] = &[
    ("No, I did not pursue any higher education prior to this degree", 0),
    ("Foundation Program / Diploma related to Information Technology", 1),
];

pub const GRADUATION_YEAR: &[(&str, i64)] = &[
    ("2019", 1),
    ("2020", 2),
    ("2021", 3),
    ("2022", 4),
    ("2023", 5),
    ("2024", 6),
];

pub const SECOND_YEAR_AVG: &[(&str, i64)] = &[
    ("Below 40%", 1),
    ("40% - 50%", 2),
    ("51% - 60%", 3),
    ("61% - 70%", 4),
    ("Above 70%", 5),
];

pub const INTERNSHIP_COMPLETED: &[(&str, i64)] = &[
    ("Yes, I completed the recommended internship", 1),
    ("No, I did not complete the recommended internship", 0),
];

pub const CHRONIC_ILLNESS: &[(&str, i64)] = &[("No", 0), ("Yes", 1)];

pub const PARENTS_EMPLOYMENT: &[&str] = &[
    "Both parents/guardians are employed",
    "One parent/guardian is employed",
    "Neither parents/guardian is employed",
];

pub const PARENTS_EDUCATION: &[&str] = &[
    "Higher education (Diploma or Bachelor's degree)",
    "Postgraduate education (Master's degree or higher)",
    "Completed A-Level",
    "Completed O-Level",
    "Prefer not to say",
];

pub const PARENTS_COHABITATION: &[&str] = &[
    "Both parents/guardians live together",
    "Parents/guardians are separated but living independently",
    "Both parents/guardians are deceased",
];

pub const HOUSEHOLD_INCOME: &[(&str, i64)] = &[
    ("Below LKR 100,000", 1),
    ("LKR 100,000 - 300,000", 2),
    ("LKR 300,000 - 500,000", 3),
    ("Above LKR 500,000", 4),
    ("Prefer not to say", 0),
];

pub const ACCOMMODATION_TYPE: &[&str] = &[
    "Living with parents/guardians",
    "Off-campus rented accommodation",
    "Shared accommodation with friends or relatives",
];

pub const TRANSPORT_MODE: &[&str] = &[
    "Driving / Driven by personal vehicle",
    "Uber or other ride-hailing services",
    "Public bus / train",
];

pub const TRAVEL_TIME: &[(&str, i64)] = &[
    ("Less than 30 minutes", 1),
    ("30 minutes to 1 hour", 2),
    ("1 hour to 1.5 hours", 3),
    ("1.5 hours to 2 hours", 4),
    ("More than 2 hours", 5),
];

pub const EMPLOYED_DURING_DEGREE: &[&str] = &[
    "Yes, full-time employment",
    "Yes, part-time employment",
    "No, I was not employed",
];

pub const LEISURE_HOURS_PER_WEEK: &[(&str, i64)] = &[
    ("Less than 5 hours", 1),
    ("05 – 10 hours", 2),
    ("10 – 20 hours", 3),
    ("More than 20 hours", 4),
];

pub const DAILY_SCREEN_TIME: &[(&str, i64)] = &[
    ("Less than 2 hours", 1),
    ("2 – 4 hours", 2),
    ("5 – 7 hours", 3),
    ("8 – 10 hours", 4),
    ("More than 10 hours", 5),
];

pub const SURVEY_FIELDS: [FieldDefinition; 25] = [
    FieldDefinition::ordinal(
        "AgeAtEnrollment",
        "01. What was your age at the time of enrollment in your current degree program? (Select the appropriate range)",
        AGE_AT_ENROLLMENT,
    ),
    FieldDefinition::one_hot("Gender", "02. What is your gender?", GENDER),
    FieldDefinition::one_hot(
        "SyllabusMedium",
        "03. What type of syllabus and medium did you follow during your primary and secondary education? (Select the option that best applies to you)",
        SYLLABUS_MEDIUM,
    ),
    FieldDefinition::ordinal(
        "OLevelCoreModulePass",
        "04. Did you achieve a minimum 'C' pass in Mathematics, English, and Computing at your Ordinary Level (O-Level) examinations?",
        O_LEVEL_CORE_MODULE_PASS,
    ),
    FieldDefinition::one_hot(
        "ALStream",
        "06. Which stream did you study for your Advanced Level (A-Level) examination? (Select the option that best applies to you.)",
        AL_STREAM,
    ),
    FieldDefinition::ordinal(
        "ALevelCoreModulePass",
        "07. Did you achieve a minimum of three 'C' passes in your Advanced Level (A-Level) examination? (Please select the option that best matches your overall results.)",
        YES_NO_PASS,
    ),
    FieldDefinition::one_hot(
        "ALEnglishOrCourse",
        "09. Did you follow A-Level English or complete an English course prior to starting your degree program?",
        AL_ENGLISH_OR_COURSE,
    ),
    FieldDefinition::ordinal(
        "PriorHigherEdu",
        "10. Did you pursue any higher education program prior to starting your current degree?",
        PRIOR_HIGHER_EDU,
    ),
    FieldDefinition::ordinal(
        "GraduationYear",
        "11. In which year did you graduate from the Informatics Institute of Technology (IIT) Sri Lanka?",
        GRADUATION_YEAR,
    )
    .with_fallback(0),
    FieldDefinition::ordinal(
        "SecondYearAvg",
        "12. What was your average percentage for your second year of studies? (Select the range that best reflects your average score)",
        SECOND_YEAR_AVG,
    ),
    FieldDefinition::ordinal(
        "InternshipCompleted",
        "13. Did you complete the recommended degree-related internship during your third year of studies that aligns with the career opportunities provided by your degree program?",
        INTERNSHIP_COMPLETED,
    ),
    FieldDefinition::identity_int(
        "SatisfactionRating",
        "14. After returning for your final year of studies, how would you rate your satisfaction with your degree program and your overall career path? (Use the scale below to rate your satisfaction.)",
        1,
        5,
    ),
    FieldDefinition::identity_int(
        "StressAnxietyLevel",
        "15. How would you rate your overall stress and anxiety levels during your time in the degree program? (Use the scale below to rate your experience.)",
        1,
        5,
    ),
    FieldDefinition::identity_int(
        "PhysicalHealth",
        "16. How would you rate your overall physical health during your time in the degree program? (Use the scale below to rate your experience.)",
        1,
        5,
    ),
    FieldDefinition::ordinal(
        "ChronicIllness",
        "17. Did you have any chronic illnesses that hindered your academic performance during your degree program? (For example, asthma, diabetes, etc.)",
        CHRONIC_ILLNESS,
    ),
    FieldDefinition::one_hot(
        "ParentsEmployment",
        "18. What is the employment status of your parents or guardians?",
        PARENTS_EMPLOYMENT,
    ),
    FieldDefinition::one_hot(
        "ParentsEducation",
        "19. What is the highest level of education attained by at least one of your parents or guardians? (Select the option that best applies to both parents or guardians)",
        PARENTS_EDUCATION,
    ),
    FieldDefinition::one_hot(
        "ParentsCohabitation",
        "20. What is the marital status or cohabitation status of your parents or guardians?",
        PARENTS_COHABITATION,
    ),
    FieldDefinition::ordinal(
        "HouseholdIncome",
        "21. What was the approximate monthly household income during your time as a student? (Select the option that best applies to your household)",
        HOUSEHOLD_INCOME,
    ),
    FieldDefinition::one_hot(
        "AccommodationType",
        "22. What type of accommodation did you use during your degree program?",
        ACCOMMODATION_TYPE,
    ),
    FieldDefinition::multi_label(
        "TransportMode",
        "23. What mode of transport did you use to travel from your accommodation to the university campus?",
        TRANSPORT_MODE,
    ),
    FieldDefinition::ordinal(
        "TravelTime",
        "24. How long did it typically take to travel from your accommodation to the university campus?",
        TRAVEL_TIME,
    ),
    FieldDefinition::one_hot(
        "EmployedDuringDegree",
        "25. Were you employed while pursuing your degree?",
        EMPLOYED_DURING_DEGREE,
    ),
    FieldDefinition::ordinal(
        "LeisureHoursPerWeek",
        "26. How many hours did you spend on leisure activities per week during your degree program?",
        LEISURE_HOURS_PER_WEEK,
    ),
    FieldDefinition::ordinal(
        "DailyScreenTime",
        "27. How many hours did you spend on screen time per day during your degree program? (Including television, computer, and mobile devices)",
        DAILY_SCREEN_TIME,
    ),
];
