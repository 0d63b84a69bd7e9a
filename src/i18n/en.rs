use super::*;

pub static EN: Dictionary = Dictionary {
    nav: NavText {
        home: "Home",
        about: "About",
        experience: "Experience",
        skills: "Skills",
        education: "Education",
        projects: "Projects",
        contact: "Contact",
        open_menu: "Open menu",
        close_menu: "Close menu",
        back_to_top: "Back to top",
    },
    hero: HeroText {
        greeting: "Hello, I am",
        name: "Juan G.",
        title: "Fullstack Developer",
        description: "I build innovative and scalable web applications with modern technologies.",
        cta: "View My Work",
        contact: "Contact Me",
        roles: &[
            "Fullstack Developer",
            "Serverless Builder",
            "AI Integrations Engineer",
            "Backend Developer",
        ],
    },
    about: AboutText {
        title: "About Me",
        description: "As a software developer with four years of experience, I stand out for my work ethic and professionalism in every project. I have a strong desire to learn and grow, always looking for new technologies and best practices. I enjoy collaborating in teams and value constructive feedback. My goal is to develop innovative solutions creatively and contribute to the company's success by leveraging my knowledge and experience.",
        years_of_experience: "Years of Experience",
        completed_projects: "Completed Projects",
        technologies: "Technologies",
    },
    experience: ExperienceText {
        title: "Work Experience",
        current: "Present",
        roles: &[
            Role {
                title: "Fullstack Developer Mid",
                company: "Genpact",
                period: "August 2024 - Present",
                description: "As a Full-Stack Developer, I specialize in AWS, React, TypeScript, and Python, with experience in serverless architectures using AWS Lambda for artificial intelligence applications. I integrate LLMs through Amazon Bedrock to optimize data processing, offering innovative and high-impact solutions.",
                current: true,
            },
            Role {
                title: "Backend Developer Jr",
                company: "Yalutec",
                period: "June 2022 - August 2024",
                description: "As a Junior Backend Developer, I have experience in Node.js, JavaScript, and AWS (S3, Lambda), developing RESTful APIs and optimizing databases in Linux environments. I stand out for my quick learning, problem-solving, and teamwork, always focused on creating efficient and scalable solutions.",
                current: false,
            },
        ],
    },
    skills: SkillsText {
        title: "Technical Skills",
        hard_skills: "Hard Skills",
        soft_skills: "Soft Skills",
        languages: "Languages",
        chart_title: "Proficiency by Technology",
        all: "All",
        year: "year",
        years: "years",
        experience: "experience",
        select_prompt: "Select a skill to see detailed information",
        hard: &[
            "Backend development with JavaScript and Node.js",
            "Frontend development with React and TypeScript",
            "Backend development with C# and .NET Framework",
            "Development with PHP using Laravel and Symfony Framework",
            "Web services (REST API, SOAP)",
            "Databases: SQL, MongoDB, MariaDB",
            "Version control: GitHub and GitLab",
            "AWS Services: Lambda, S3, and API Gateway",
            "Linux fundamentals certification",
        ],
        soft: &[
            "Proactivity",
            "Organization",
            "Responsibility",
            "Teamwork capability",
            "Interpersonal relationships",
            "Empathy",
            "Leadership",
            "Team management",
            "Problem solving",
            "Agility in task development",
        ],
        languages_list: &[
            SpokenLanguage {
                name: "English",
                level: "Advanced (C1)",
                proficiency: 80,
            },
            SpokenLanguage {
                name: "Portuguese",
                level: "Basic (A2)",
                proficiency: 30,
            },
            SpokenLanguage {
                name: "Spanish",
                level: "Native",
                proficiency: 100,
            },
        ],
    },
    education: EducationText {
        title: "Education",
        degrees: &[
            Degree {
                title: "Systems Engineering",
                institution: "Universidad Mariano Gálvez",
                period: "2022 - 2026",
                status: "In Progress",
            },
            Degree {
                title: "Computer Engineering",
                institution: "Universidad Rafael Landívar",
                period: "2018 - 2023",
                status: "Completed Curriculum",
            },
        ],
        certifications_title: "Technical Careers & Certifications",
        certifications: &[
            "Fullstack Developer Technician",
            "Network Administration and Security Technician",
            "Linux Server Installation and Administration Technician",
            "Structured Cabling and Fiber Optics Technician",
            "Linux Fundamentals Certification",
        ],
    },
    projects: ProjectsText {
        title: "Projects",
        description: "Here are some of the projects I've worked on",
        load_more: "Load More Projects",
        all: "All",
        empty: "No projects in this category yet.",
        code: "Code",
        demo: "Demo",
    },
    contact: ContactText {
        title: "Contact Me",
        description: "Feel free to reach out for collaboration or questions",
        form_name: "Name",
        form_email: "Email",
        form_message: "Message",
        form_send: "Send Message",
        form_sent: "Thanks for your message! This form doesn't send email yet, so please reach me directly.",
        phone: "Phone",
        email: "Email",
        location: "Location",
    },
    theme: ThemeText {
        light: "Light Mode",
        dark: "Dark Mode",
        high_contrast: "High Contrast Mode",
    },
    language: LanguageText {
        en: "English",
        es: "Spanish",
    },
    footer: FooterText {
        rights: "All rights reserved.",
        navigation: "Navigation",
        built: "Built",
    },
    error: ErrorText {
        title: "Something went wrong!",
        fallback: "An unexpected error occurred. Please try again.",
        retry: "Try again",
        not_found: "Page not found.",
    },
};
