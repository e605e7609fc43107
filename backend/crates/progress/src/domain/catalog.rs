//! Course Catalog
//!
//! Static course content. The single source of truth for both the lesson
//! listing and the aggregate denominator (`total_lessons`).

use std::collections::BTreeMap;

/// One lesson of a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub content: String,
}

impl Lesson {
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Immutable course id → lessons table, built once at startup
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: BTreeMap<String, Vec<Lesson>>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course (builder style)
    pub fn with_course(mut self, course_id: impl Into<String>, lessons: Vec<Lesson>) -> Self {
        self.courses.insert(course_id.into(), lessons);
        self
    }

    /// Lessons of a course, in catalog order
    pub fn lessons(&self, course_id: &str) -> Option<&[Lesson]> {
        self.courses.get(course_id).map(Vec::as_slice)
    }

    /// Fixed lesson count of a course
    pub fn total_lessons(&self, course_id: &str) -> Option<u64> {
        self.lessons(course_id).map(|lessons| lessons.len() as u64)
    }

    /// Whether `lesson_id` (decimal form) belongs to the course
    pub fn contains_lesson(&self, course_id: &str, lesson_id: &str) -> bool {
        self.lessons(course_id).is_some_and(|lessons| {
            lessons
                .iter()
                .any(|lesson| lesson.id.to_string() == lesson_id)
        })
    }

    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    /// The four built-in courses
    pub fn builtin() -> Self {
        Self::new()
            .with_course(
                "1",
                vec![
                    Lesson::new(
                        1,
                        "Introduction to HTML",
                        "HTML (HyperText Markup Language) is the standard language for creating web pages. It describes the structure of a web page using markup. HTML elements are the building blocks of HTML pages.",
                    ),
                    Lesson::new(
                        2,
                        "HTML Elements",
                        "HTML elements are represented by tags, and they form the structure of a web page. Some common HTML elements include headings (`<h1>` to `<h6>`), paragraphs (`<p>`), links (`<a>`), images (`<img>`), lists (`<ul>`, `<ol>`, and `<li>`), and tables (`<table>`).",
                    ),
                    Lesson::new(
                        3,
                        "HTML Attributes",
                        "HTML attributes provide additional information about HTML elements. They are always included in the opening tag and usually come in name/value pairs like `name='value'`. Common attributes include `href` for links, `src` for images, and `alt` for alternative text for images.",
                    ),
                    Lesson::new(
                        4,
                        "HTML Forms",
                        "HTML forms are used to collect user input. Form elements include text fields, checkboxes, radio buttons, and submit buttons. The `<form>` element wraps these elements and specifies the action URL where the data should be sent.",
                    ),
                ],
            )
            .with_course(
                "2",
                vec![
                    Lesson::new(
                        1,
                        "Introduction to CSS",
                        "CSS (Cascading Style Sheets) is used to control the style and layout of web pages. CSS allows you to apply styles to HTML elements, including setting colors, fonts, and spacing.",
                    ),
                    Lesson::new(
                        2,
                        "CSS Selectors",
                        "CSS selectors are used to select HTML elements to apply styles to them. Common selectors include element selectors (e.g., `p`), class selectors (e.g., `.class-name`), and ID selectors (e.g., `#id-name`).",
                    ),
                    Lesson::new(
                        3,
                        "CSS Box Model",
                        "The CSS box model describes the layout of elements on a web page. Each element is represented as a rectangular box, consisting of margins, borders, padding, and the content area. Understanding the box model is crucial for designing web page layouts.",
                    ),
                    Lesson::new(
                        4,
                        "CSS Flexbox",
                        "Flexbox (Flexible Box Layout) is a CSS layout model that provides a more efficient way to lay out, align, and distribute space among items in a container. It allows you to create flexible and responsive designs by controlling the positioning of elements.",
                    ),
                ],
            )
            .with_course(
                "3",
                vec![
                    Lesson::new(
                        1,
                        "Introduction to JavaScript",
                        "JavaScript is a versatile programming language that allows you to add interactivity and dynamic behavior to web pages. It can be used to create responsive user interfaces, validate forms, and manipulate the DOM (Document Object Model).",
                    ),
                    Lesson::new(
                        2,
                        "JavaScript Variables and Data Types",
                        "JavaScript variables are used to store data values. Variables can hold different data types, including numbers, strings, booleans, arrays, and objects. You can declare variables using `var`, `let`, or `const`.",
                    ),
                    Lesson::new(
                        3,
                        "JavaScript Functions",
                        "JavaScript functions are blocks of code designed to perform a particular task. They are executed when called (invoked). Functions can accept parameters and return values. You can define functions using the `function` keyword.",
                    ),
                    Lesson::new(
                        4,
                        "JavaScript Events",
                        "JavaScript events are actions or occurrences that happen in the browser, such as clicks, key presses, and form submissions. You can use event listeners to execute code in response to these events. Common event types include `click`, `keydown`, and `submit`.",
                    ),
                ],
            )
            .with_course(
                "4",
                vec![
                    Lesson::new(
                        1,
                        "React Components",
                        "A class component must include the extends React.Component statement. This statement creates an inheritance to React.Component, and gives your component access to React.Component's functions.",
                    ),
                    Lesson::new(
                        2,
                        "React Class Components",
                        "Components are independent and reusable bits of code. They serve the same purpose as JavaScript functions, but work in isolation and return HTML via a render() function. Components come in two types, Class components and Function components, in this chapter you will learn about Class components.",
                    ),
                    Lesson::new(
                        3,
                        "React useEffect Hooks",
                        "The useEffect Hook allows you to perform side effects in your components. Some examples of side effects are: fetching data, directly updating the DOM, and timers. useEffect accepts two arguments. The second argument is optional. useEffect(<function>, <dependency>)",
                    ),
                    Lesson::new(
                        4,
                        "React useContext Hook",
                        "React Context is a way to manage state globally. It can be used together with the useState Hook to share state between deeply nested components more easily than with useState alone.",
                    ),
                ],
            )
    }
}
